//! Compose Collector - gathers docker-compose files into a tracked project
//!
//! Given a source tree, the collector:
//!
//! - finds every `docker-compose.yml` / `docker-compose.yaml` at any depth
//! - copies each one to `containers/<parent-dir-name>/` in the project
//! - records the copies in `config.yaml`, with a placeholder source URL for
//!   every file not tracked yet

pub mod collector;
pub mod compose;
pub mod config;
pub mod container;
pub mod error;

pub use collector::{CollectReport, ComposeCollector};
pub use error::{CollectorError, Result};
