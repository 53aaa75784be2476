//! Filesystem Implementation
//!
//! The node store is a flat map from normalized absolute path to [`Node`].
//! Node identity is its canonical path, and parent/child relations are path
//! arithmetic; `navigate` walks the requested path one segment at a time and
//! fails on the first segment that names nothing.

use std::collections::HashMap;

use super::types::{FsError, Node};

/// Join a directory path and a child name into an absolute path.
fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent path of an absolute path ("/" for top-level entries).
fn parent_of(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }
    match path.rsplit_once('/') {
        Some(("", _)) => Some("/".to_string()),
        Some((parent, _)) => Some(parent.to_string()),
        None => None,
    }
}

/// Simulated filesystem. Owns the node store plus the session-scoped
/// ambient state: who is running commands and where they are standing.
pub struct Filesystem {
    nodes: HashMap<String, Node>,
    pub current_user: String,
    pub current_dir: String,
}

impl Filesystem {
    /// Build a filesystem populated with the fixed seed tree.
    pub fn new() -> Self {
        let mut fs = Self {
            nodes: HashMap::new(),
            current_user: "player".to_string(),
            current_dir: "/".to_string(),
        };
        fs.seed();
        fs
    }

    fn seed(&mut self) {
        self.insert("/", Node::directory("/", "root", "755"));

        self.add_dir("/bin", "root", "755");
        self.add_dir("/etc", "root", "755");
        self.add_dir("/home", "root", "755");
        self.add_dir("/tmp", "root", "777");
        self.add_dir("/var", "root", "755");
        self.add_dir("/root", "root", "700");
        self.add_dir("/root/.ssh", "root", "700");
        self.add_dir("/home/player", "player", "755");

        self.add_file(
            "/etc/passwd",
            "root",
            "644",
            "root:x:0:0:root:/root:/bin/bash\nplayer:x:1000:1000:player:/home/player:/bin/bash\n",
        );
        self.add_file(
            "/etc/shadow",
            "root",
            "640",
            "root:$6$hash:18000:0:99999:7:::\nplayer:$6$hash:18000:0:99999:7:::\n",
        );
        self.add_file(
            "/home/player/notes.txt",
            "player",
            "644",
            "Remember: The password is hidden in the log files\n",
        );
        self.add_file(
            "/home/player/secret.txt",
            "player",
            "600",
            "Confidential data here\n",
        );
        self.add_file(
            "/tmp/log.txt",
            "root",
            "644",
            "[2025-11-15] User login attempt\n[2025-11-15] Password: hidden_flag_123\n",
        );
        self.add_file("/bin/ls", "root", "755", "#!/bin/bash\n# List command");
        self.add_file("/bin/cat", "root", "755", "#!/bin/bash\n# Cat command");
    }

    fn insert(&mut self, path: &str, node: Node) {
        self.nodes.insert(path.to_string(), node);
    }

    fn add_dir(&mut self, path: &str, owner: &str, permissions: &str) {
        let name = path.rsplit('/').next().unwrap_or(path);
        self.insert(path, Node::directory(name, owner, permissions));
    }

    fn add_file(&mut self, path: &str, owner: &str, permissions: &str, content: &str) {
        let name = path.rsplit('/').next().unwrap_or(path);
        self.insert(path, Node::file(name, owner, permissions, content));
    }

    /// Look up a node by canonical absolute path.
    pub fn node(&self, path: &str) -> Option<&Node> {
        self.nodes.get(path)
    }

    /// Resolve a path to its canonical absolute form. Absolute paths walk
    /// from the root, relative ones from the current directory. Empty and
    /// "." segments are skipped, ".." pops one level (no-op at the root),
    /// and every other segment must name an existing entry. The walk is
    /// segment-wise, not lexical: a missing intermediate segment fails even
    /// if a later ".." would cancel it out.
    pub fn navigate(&self, path: &str) -> Result<String, FsError> {
        let mut parts: Vec<String> = if path.starts_with('/') {
            Vec::new()
        } else {
            self.current_dir
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        };

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                name => {
                    parts.push(name.to_string());
                    let candidate = format!("/{}", parts.join("/"));
                    if !self.nodes.contains_key(&candidate) {
                        return Err(FsError::NotFound {
                            path: path.to_string(),
                        });
                    }
                }
            }
        }

        if parts.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/{}", parts.join("/")))
        }
    }

    /// Resolve a path and return both the canonical path and the node.
    pub fn resolve(&self, path: &str) -> Result<(String, &Node), FsError> {
        let canonical = self.navigate(path)?;
        let node = self.nodes.get(&canonical).ok_or_else(|| FsError::NotFound {
            path: path.to_string(),
        })?;
        Ok((canonical, node))
    }

    /// Read a file's content the way the reading commands see it: the path
    /// must resolve to a readable regular file.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let (_, node) = self.resolve(path)?;
        if node.is_dir {
            return Err(FsError::IsADirectory {
                path: path.to_string(),
            });
        }
        if !node.is_readable(&self.current_user) {
            return Err(FsError::PermissionDenied {
                path: path.to_string(),
            });
        }
        Ok(&node.content)
    }

    /// Direct children of a directory, sorted by name (case-sensitive).
    pub fn children(&self, dir_path: &str) -> Vec<&Node> {
        let mut out: Vec<&Node> = self
            .nodes
            .iter()
            .filter(|(path, _)| parent_of(path).as_deref() == Some(dir_path))
            .map(|(_, node)| node)
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Direct child of the current directory, looked up by bare name. A
    /// name containing a separator is simply a miss.
    pub fn child(&self, name: &str) -> Option<&Node> {
        if name.contains('/') {
            return None;
        }
        self.nodes.get(&join(&self.current_dir, name))
    }

    /// Change the current directory. Succeeds only if the target exists, is
    /// a directory, and is readable by the current user; fails with no side
    /// effects otherwise.
    pub fn change_directory(&mut self, path: &str) -> Result<(), FsError> {
        let (canonical, node) = self.resolve(path)?;
        if !node.is_dir {
            return Err(FsError::NotADirectory {
                path: path.to_string(),
            });
        }
        if !node.is_readable(&self.current_user) {
            return Err(FsError::PermissionDenied {
                path: path.to_string(),
            });
        }
        self.current_dir = canonical;
        Ok(())
    }

    /// Create a file in the current directory, owned by the current user.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<(), FsError> {
        let path = join(&self.current_dir, name);
        if self.nodes.contains_key(&path) {
            return Err(FsError::AlreadyExists {
                path: name.to_string(),
            });
        }
        let node = Node::file(name, &self.current_user, "644", content);
        self.nodes.insert(path, node);
        Ok(())
    }

    /// Create a directory in the current directory, owned by the current user.
    pub fn create_directory(&mut self, name: &str) -> Result<(), FsError> {
        let path = join(&self.current_dir, name);
        if self.nodes.contains_key(&path) {
            return Err(FsError::AlreadyExists {
                path: name.to_string(),
            });
        }
        let node = Node::directory(name, &self.current_user, "755");
        self.nodes.insert(path, node);
        Ok(())
    }

    /// Delete a direct child of the current directory. Removing a directory
    /// drops everything under it.
    pub fn delete(&mut self, name: &str) -> Result<(), FsError> {
        let path = join(&self.current_dir, name);
        if self.nodes.remove(&path).is_none() {
            return Err(FsError::NotFound {
                path: name.to_string(),
            });
        }
        let prefix = format!("{}/", path);
        self.nodes.retain(|p, _| !p.starts_with(&prefix));
        Ok(())
    }

    /// Replace the permission string of a direct child of the current
    /// directory, looked up by name. Deliberately narrower than the
    /// path-resolving operations; a path argument is a plain miss.
    pub fn chmod(&mut self, name: &str, permissions: &str) -> Result<(), FsError> {
        if name.contains('/') {
            return Err(FsError::NotFound {
                path: name.to_string(),
            });
        }
        let path = join(&self.current_dir, name);
        match self.nodes.get_mut(&path) {
            Some(node) => {
                node.permissions = permissions.to_string();
                Ok(())
            }
            None => Err(FsError::NotFound {
                path: name.to_string(),
            }),
        }
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}
