//! The collection pipeline: discover, copy, merge into the config

use crate::compose::ComposeFinder;
use crate::config::{ConfigDocument, ConfigStore};
use crate::container::{CollisionPolicy, MappingRecord, Materializer};
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Outcome of one collection run
#[derive(Debug, Clone, Serialize)]
pub struct CollectReport {
    /// Discovered compose files, sorted
    pub discovered: Vec<PathBuf>,
    /// One record per copied file, in discovery order
    pub mappings: Vec<MappingRecord>,
    /// Entries appended to the config by this run
    pub added: usize,
    /// The config as written
    pub config: ConfigDocument,
}

/// Collects compose files from a source tree into a project
pub struct ComposeCollector {
    source_dir: PathBuf,
    project_dir: PathBuf,
    policy: CollisionPolicy,
}

impl ComposeCollector {
    /// Create a collector
    pub fn new(source_dir: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            project_dir: project_dir.into(),
            policy: CollisionPolicy::default(),
        }
    }

    /// Set collision policy
    pub fn policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Find compose files under the source directory
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        ComposeFinder::find(&self.source_dir)
    }

    /// Copy discovered files into the project and update its config
    pub fn collect(&self, discovered: Vec<PathBuf>) -> Result<CollectReport> {
        let mappings = Materializer::new(&self.project_dir)
            .policy(self.policy)
            .materialize(&discovered)?;

        let (config, added) = ConfigStore::for_project(&self.project_dir).update(&mappings)?;

        Ok(CollectReport {
            discovered,
            mappings,
            added,
            config,
        })
    }

    /// Run the whole pipeline.
    ///
    /// Finding nothing is not an error here; the report is simply empty and
    /// the config is still written.
    pub fn run(&self) -> Result<CollectReport> {
        let discovered = self.discover()?;
        info!(
            source = %self.source_dir.display(),
            count = discovered.len(),
            "Discovered compose files"
        );
        self.collect(discovered)
    }
}
