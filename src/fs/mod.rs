//! Virtual File System
//!
//! A purely in-memory filesystem with owner/permission semantics. One
//! instance per session; nothing here touches the host filesystem.

pub mod types;
pub mod vfs;

pub use types::{FsError, Node, DIR_SIZE};
pub use vfs::Filesystem;
