//! Docker Compose file discovery

use crate::error::{CollectorError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names recognised as compose descriptors (matched case-sensitively)
pub const DESCRIPTOR_FILES: &[&str] = &["docker-compose.yml", "docker-compose.yaml"];

/// Compose file finder
pub struct ComposeFinder;

impl ComposeFinder {
    /// Check whether a file name is one of the accepted descriptor names
    pub fn is_descriptor(name: &str) -> bool {
        DESCRIPTOR_FILES.contains(&name)
    }

    /// Find every compose descriptor beneath `root`, the root itself included.
    ///
    /// The root is canonicalized first, so all returned paths are absolute.
    /// Results are sorted by path. An empty result is not an error.
    pub fn find(root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = match std::fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CollectorError::NotFound(root.to_path_buf()));
            }
            Err(e) => return Err(CollectorError::io(root, e)),
        };

        if !metadata.is_dir() {
            return Err(CollectorError::NotADirectory(root.to_path_buf()));
        }

        let root = root
            .canonicalize()
            .map_err(|e| CollectorError::io(root, e))?;

        let mut found = Vec::new();
        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_name().to_str().is_some_and(Self::is_descriptor) {
                continue;
            }

            // Symlinks count only when they resolve to a regular file
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink()
                    && std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file()));

            if is_file {
                debug!(path = %entry.path().display(), "Found compose file");
                found.push(entry.into_path());
            }
        }

        found.sort();
        Ok(found)
    }
}
