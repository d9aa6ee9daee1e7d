//! Container mapping types

use serde::Serialize;
use std::path::PathBuf;

/// Directory under the project root holding the per-container copies
pub const CONTAINERS_DIR: &str = "containers";

/// How same-named containers from different subtrees are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Later copies overwrite earlier ones; every file still yields a record
    #[default]
    Overwrite,
    /// Fail before copying anything
    Reject,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Correlates a discovered compose file with its local copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRecord {
    /// Absolute path of the discovered file
    pub source: PathBuf,
    /// Copy location relative to the project root, always `/`-separated
    pub local_path: String,
    /// Base name of the source's parent directory
    pub container_name: String,
}

impl MappingRecord {
    /// Build a record, deriving `local_path` from the container and file names
    pub fn new(source: PathBuf, container_name: &str, file_name: &str) -> Self {
        Self {
            source,
            local_path: format!("{}/{}/{}", CONTAINERS_DIR, container_name, file_name),
            container_name: container_name.to_string(),
        }
    }
}
