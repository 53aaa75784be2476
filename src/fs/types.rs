//! File System Types
//!
//! Node records and the filesystem error taxonomy.

use chrono::{DateTime, Local};
use thiserror::Error;

/// Logical size reported for every directory.
pub const DIR_SIZE: u64 = 4096;

/// File system errors. Display strings match the Unix-style messages the
/// commands emit, so handlers can render them as `"<cmd>: {err}"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Permission denied")]
    PermissionDenied { path: String },

    #[error("{path}: File exists")]
    AlreadyExists { path: String },

    #[error("{path}: Is a directory")]
    IsADirectory { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// One file or directory entry in the simulated tree.
///
/// Permissions are a three-digit string ("644", "755", ...). Digit 0 is the
/// owner class, digit 2 the "other" class. The middle digit is stored but
/// never consulted; the simulation has no group class.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub is_dir: bool,
    pub owner: String,
    pub permissions: String,
    pub content: String,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl Node {
    pub fn file(name: &str, owner: &str, permissions: &str, content: &str) -> Self {
        let now = Local::now();
        Self {
            name: name.to_string(),
            is_dir: false,
            owner: owner.to_string(),
            permissions: permissions.to_string(),
            content: content.to_string(),
            created: now,
            modified: now,
        }
    }

    pub fn directory(name: &str, owner: &str, permissions: &str) -> Self {
        let now = Local::now();
        Self {
            name: name.to_string(),
            is_dir: true,
            owner: owner.to_string(),
            permissions: permissions.to_string(),
            content: String::new(),
            created: now,
            modified: now,
        }
    }

    /// The permission digit that applies to `user`: owner class when the
    /// user owns the node, "other" class otherwise. A malformed permission
    /// string reads as 0 (no access).
    fn class_digit(&self, user: &str) -> u32 {
        let index = if user == self.owner { 0 } else { 2 };
        self.permissions
            .chars()
            .nth(index)
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0)
    }

    pub fn is_readable(&self, user: &str) -> bool {
        self.class_digit(user) & 4 != 0
    }

    pub fn is_writable(&self, user: &str) -> bool {
        self.class_digit(user) & 2 != 0
    }

    pub fn is_executable(&self, user: &str) -> bool {
        self.class_digit(user) & 1 != 0
    }

    /// Size in bytes: content length for files, a fixed constant for
    /// directories.
    pub fn size(&self) -> u64 {
        if self.is_dir {
            DIR_SIZE
        } else {
            self.content.len() as u64
        }
    }
}
