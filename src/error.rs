//! Error types for the collector

use std::path::PathBuf;
use thiserror::Error;

/// Result type for collector operations
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Collector error types
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Source directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file parse error in {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Cannot derive a container name for {}", .0.display())]
    NoContainerName(PathBuf),

    #[error(
        "Container name '{container}' is used by both {} and {}",
        .first.display(),
        .second.display()
    )]
    ContainerNameCollision {
        container: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] serde_yaml::Error),
}

impl CollectorError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectorError::Io {
            path: path.into(),
            source,
        }
    }
}
