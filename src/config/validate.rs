//! Checks mirroring what the update checker requires of `config.yaml`

use super::document::{scalar_text, ConfigDocument, FileEntry};

/// Notification backends the update checker understands
pub const NOTIFICATION_TYPES: &[&str] = &["slack", "ntfy", "telegram", "debug"];

/// Config validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a config document, returning warnings.
    ///
    /// Placeholder URLs are not reported here; see [`Self::pending_sources`].
    pub fn validate(document: &ConfigDocument) -> Vec<String> {
        let mut warnings = Vec::new();

        if document.files.is_empty() {
            warnings.push("No file mappings in config".to_string());
        }

        for (index, entry) in document.files.iter().enumerate() {
            if entry.local_path.is_empty() {
                warnings.push(format!("Entry {} has an empty local_path", index + 1));
            }
        }

        let notifications = &document.notifications;
        if !NOTIFICATION_TYPES.contains(&notifications.kind.as_str()) {
            warnings.push(format!(
                "Notification type '{}' must be one of: {}",
                notifications.kind,
                NOTIFICATION_TYPES.join(", ")
            ));
        }

        let missing = |field: &Option<serde_yaml::Value>| {
            scalar_text(field.as_ref()).map_or(true, |text| text.is_empty())
        };
        match notifications.kind.as_str() {
            "telegram" => {
                if missing(&notifications.telegram_token) {
                    warnings.push("telegram_token is required for telegram notifications".to_string());
                }
                if missing(&notifications.telegram_chat) {
                    warnings.push("telegram_chat is required for telegram notifications".to_string());
                }
            }
            "slack" if missing(&notifications.slack_webhook) => {
                warnings.push("slack_webhook is required for slack notifications".to_string());
            }
            "ntfy" if missing(&notifications.ntfy_topic) => {
                warnings.push("ntfy_topic is required for ntfy notifications".to_string());
            }
            _ => {}
        }

        warnings
    }

    /// Entries still waiting for a source URL
    pub fn pending_sources(document: &ConfigDocument) -> Vec<&FileEntry> {
        document
            .files
            .iter()
            .filter(|f| !f.local_path.is_empty() && f.is_pending())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::parse_document;

    #[test]
    fn test_fresh_entries_are_pending() {
        let doc = parse_document(
            r##"
files:
  - local_path: containers/web/docker-compose.yml
    source_url: "# TODO: Add source URL for web"
  - local_path: containers/db/docker-compose.yml
    source_url: https://example.com/db.yml
"##,
        )
        .unwrap();

        let pending = ConfigValidator::pending_sources(&doc);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].local_path, "containers/web/docker-compose.yml");

        assert!(ConfigValidator::validate(&doc).is_empty());
    }

    #[test]
    fn test_empty_local_path() {
        let doc = parse_document(
            r#"
files:
  - source_url: https://example.com/a.yml
"#,
        )
        .unwrap();

        assert_eq!(
            ConfigValidator::validate(&doc),
            vec!["Entry 1 has an empty local_path"]
        );
        assert!(ConfigValidator::pending_sources(&doc).is_empty());
    }

    #[test]
    fn test_unknown_notification_type() {
        let doc = parse_document(
            r#"
files:
  - local_path: a
    source_url: https://example.com/a.yml
notifications:
  type: email
"#,
        )
        .unwrap();

        let warnings = ConfigValidator::validate(&doc);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("email"));
    }

    #[test]
    fn test_telegram_requires_credentials() {
        let doc = parse_document(
            r#"
files:
  - local_path: a
    source_url: https://example.com/a.yml
notifications:
  type: telegram
  telegram_token: abc
"#,
        )
        .unwrap();

        let warnings = ConfigValidator::validate(&doc);
        assert_eq!(warnings, vec!["telegram_chat is required for telegram notifications"]);
    }

    #[test]
    fn test_numeric_telegram_chat_counts_as_set() {
        let doc = parse_document(
            r#"
files:
  - local_path: a
    source_url: https://example.com/a.yml
notifications:
  type: telegram
  telegram_token: abc
  telegram_chat: -1001234567890
"#,
        )
        .unwrap();

        assert!(ConfigValidator::validate(&doc).is_empty());
    }

    #[test]
    fn test_default_document_only_warns_about_files() {
        let warnings = ConfigValidator::validate(&ConfigDocument::default());
        assert_eq!(warnings, vec!["No file mappings in config"]);
    }
}
