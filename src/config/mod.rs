//! Collector configuration (`config.yaml`)
//!
//! The document maps each local compose copy to its upstream source URL and
//! carries the notification settings used by the update checker. It is loaded
//! (or synthesized), merged with newly collected files and written back whole.

pub mod document;
pub mod store;
pub mod validate;

pub use document::{
    scalar_text, ConfigDocument, FileEntry, NotificationConfig, SOURCE_URL_PLACEHOLDER,
};
pub use store::{merge_mappings, parse_document, ConfigStore, CONFIG_FILE};
pub use validate::ConfigValidator;
