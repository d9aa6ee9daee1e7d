//! Collector configuration document types

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Prefix of the `source_url` written for entries nobody has filled in yet
pub const SOURCE_URL_PLACEHOLDER: &str = "# TODO: Add source URL for ";

/// The persisted `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Tracked compose files
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Notification settings, seeded once and passed through afterwards
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Any other top-level keys, kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConfigDocument {
    /// Check whether an entry with this local path is already tracked
    pub fn contains(&self, local_path: &str) -> bool {
        self.files.iter().any(|f| f.local_path == local_path)
    }
}

/// A local compose file and where it comes from upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the project root
    #[serde(default)]
    pub local_path: String,
    /// Upstream URL, or a placeholder until the user supplies one
    #[serde(default)]
    pub source_url: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FileEntry {
    /// New entry whose source URL is the placeholder for `container_name`
    pub fn placeholder(local_path: &str, container_name: &str) -> Self {
        Self {
            local_path: local_path.to_string(),
            source_url: format!("{}{}", SOURCE_URL_PLACEHOLDER, container_name),
            extra: BTreeMap::new(),
        }
    }

    /// True while the source URL is missing or still the placeholder
    pub fn is_pending(&self) -> bool {
        let url = self.source_url.trim();
        url.is_empty() || url.starts_with(SOURCE_URL_PLACEHOLDER.trim_end())
    }
}

/// Notification settings read by the update checker.
///
/// Backend settings are kept as raw YAML scalars so values such as numeric
/// chat ids are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// One of "slack", "ntfy", "telegram" or "debug"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_webhook: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntfy_topic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntfy_server: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_token: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_chat: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            kind: "debug".to_string(),
            debug_file: Some(Value::String("notifications".to_string())),
            slack_webhook: None,
            ntfy_topic: None,
            ntfy_server: None,
            telegram_token: None,
            telegram_chat: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Render a scalar setting as text. Non-scalar values yield `None`.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
