//! Docker Compose descriptor discovery
//!
//! Walks a source tree and collects every `docker-compose.yml` or
//! `docker-compose.yaml` it contains.

pub mod finder;

pub use finder::{ComposeFinder, DESCRIPTOR_FILES};
