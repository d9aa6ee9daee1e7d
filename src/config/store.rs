//! Loading, merging and persisting the collector config

use super::document::{ConfigDocument, FileEntry};
use crate::container::MappingRecord;
use crate::error::{CollectorError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name under the project root
pub const CONFIG_FILE: &str = "config.yaml";

/// Parse a config document.
///
/// A document that is empty, null or an empty mapping yields a fresh default.
pub fn parse_document(content: &str) -> std::result::Result<ConfigDocument, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ConfigDocument::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    match &value {
        serde_yaml::Value::Null => Ok(ConfigDocument::default()),
        serde_yaml::Value::Mapping(map) if map.is_empty() => Ok(ConfigDocument::default()),
        _ => serde_yaml::from_value(value),
    }
}

/// Append a placeholder entry for every record whose local path is not tracked yet.
///
/// Returns the updated document and the number of entries appended. Duplicate
/// records within `records` are appended once.
pub fn merge_mappings(
    mut document: ConfigDocument,
    records: &[MappingRecord],
) -> (ConfigDocument, usize) {
    let mut seen: HashSet<String> = document
        .files
        .iter()
        .filter(|f| !f.local_path.is_empty())
        .map(|f| f.local_path.clone())
        .collect();

    let mut added = 0;
    for record in records {
        if seen.insert(record.local_path.clone()) {
            document
                .files
                .push(FileEntry::placeholder(&record.local_path, &record.container_name));
            added += 1;
        } else {
            debug!(local_path = %record.local_path, "Already tracked");
        }
    }

    (document, added)
}

/// Reads and writes the config document at a fixed path
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for an explicit config path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `<project_dir>/config.yaml`
    pub fn for_project(project_dir: &Path) -> Self {
        Self::new(project_dir.join(CONFIG_FILE))
    }

    /// Get the config path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or a fresh default if the file does not exist
    pub fn load_or_default(&self) -> Result<ConfigDocument> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No config file, using defaults");
                return Ok(ConfigDocument::default());
            }
            Err(e) => return Err(CollectorError::io(&self.path, e)),
        };

        parse_document(&content).map_err(|source| CollectorError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the config file with `document`
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        let content = serde_yaml::to_string(document)?;
        std::fs::write(&self.path, content).map_err(|e| CollectorError::io(&self.path, e))
    }

    /// Load, merge `records` in and save. Returns the saved document and the
    /// number of entries appended.
    pub fn update(&self, records: &[MappingRecord]) -> Result<(ConfigDocument, usize)> {
        let document = self.load_or_default()?;
        let (document, added) = merge_mappings(document, records);
        self.save(&document)?;

        info!(
            path = %self.path.display(),
            added,
            total = document.files.len(),
            "Updated config"
        );
        Ok((document, added))
    }
}
