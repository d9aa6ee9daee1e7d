//! Per-container copies of compose files
//!
//! Each discovered file is copied under `containers/<name>/`, where `<name>`
//! is the base name of the directory the file was found in.

pub mod config;
pub mod materialize;

pub use config::{CollisionPolicy, MappingRecord, CONTAINERS_DIR};
pub use materialize::Materializer;
