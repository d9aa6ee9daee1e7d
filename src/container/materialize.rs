//! Copying discovered compose files into the project

use super::config::{CollisionPolicy, MappingRecord, CONTAINERS_DIR};
use crate::error::{CollectorError, Result};
use filetime::FileTime;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copies compose files to `<project>/containers/<container>/<file>`
pub struct Materializer {
    /// Destination root for the per-container directories
    containers_dir: PathBuf,
    /// Collision handling
    policy: CollisionPolicy,
}

impl Materializer {
    /// Create a materializer for a project directory
    pub fn new(project_dir: &Path) -> Self {
        Self {
            containers_dir: project_dir.join(CONTAINERS_DIR),
            policy: CollisionPolicy::default(),
        }
    }

    /// Set collision policy
    pub fn policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the containers directory
    pub fn containers_dir(&self) -> &Path {
        &self.containers_dir
    }

    /// Container name for a source file: its parent directory's base name
    pub fn container_name(source: &Path) -> Result<String> {
        source
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CollectorError::NoContainerName(source.to_path_buf()))
    }

    /// Copy every source into place, returning one record per source in input order.
    ///
    /// Stops at the first failure; files already copied are left in place.
    pub fn materialize(&self, sources: &[PathBuf]) -> Result<Vec<MappingRecord>> {
        if self.policy == CollisionPolicy::Reject {
            Self::check_collisions(sources)?;
        }

        let mut records = Vec::with_capacity(sources.len());

        for source in sources {
            let container_name = Self::container_name(source)?;
            let file_name = source
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| CollectorError::NoContainerName(source.clone()))?;

            let target_dir = self.containers_dir.join(&container_name);
            fs::create_dir_all(&target_dir).map_err(|e| CollectorError::io(&target_dir, e))?;

            let target = target_dir.join(file_name);
            if target.exists() {
                debug!(target = %target.display(), "Overwriting existing copy");
            }
            copy_with_metadata(source, &target)?;

            info!(
                container = %container_name,
                source = %source.display(),
                "Copied compose file"
            );
            records.push(MappingRecord::new(source.clone(), &container_name, file_name));
        }

        Ok(records)
    }

    /// Reject two sources that would land in the same container directory
    fn check_collisions(sources: &[PathBuf]) -> Result<()> {
        let mut seen: HashMap<String, &PathBuf> = HashMap::new();

        for source in sources {
            let container = Self::container_name(source)?;
            if let Some(first) = seen.get(&container) {
                return Err(CollectorError::ContainerNameCollision {
                    container,
                    first: (*first).clone(),
                    second: source.clone(),
                });
            }
            seen.insert(container, source);
        }

        Ok(())
    }
}

/// Copy contents and permission bits, then carry over access/modification times
fn copy_with_metadata(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(|e| CollectorError::io(source, e))?;

    fs::copy(source, target).map_err(|e| CollectorError::io(source, e))?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, atime, mtime).map_err(|e| CollectorError::io(source, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_copy_uses_immediate_parent() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let a = write(src.path(), "a/docker-compose.yml", "services:\n  a: {}\n");
        let sub = write(src.path(), "b/sub/docker-compose.yaml", "services:\n  sub: {}\n");

        let materializer = Materializer::new(project.path());
        assert_eq!(materializer.containers_dir(), project.path().join("containers"));
        let records = materializer.materialize(&[a.clone(), sub]).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].container_name, "a");
        assert_eq!(records[0].local_path, "containers/a/docker-compose.yml");
        assert_eq!(records[0].source, a);
        assert_eq!(records[1].container_name, "sub");
        assert_eq!(records[1].local_path, "containers/sub/docker-compose.yaml");

        for record in &records {
            let copied = fs::read(project.path().join(&record.local_path)).unwrap();
            let original = fs::read(&record.source).unwrap();
            assert_eq!(copied, original);
        }
        assert!(!project.path().join("containers/b").exists());
    }

    #[test]
    fn test_copy_preserves_mtime() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let source = write(src.path(), "web/docker-compose.yml", "services: {}\n");
        let pinned = FileTime::from_unix_time(1_600_000_000, 0);
        set_file_mtime(&source, pinned).unwrap();

        Materializer::new(project.path())
            .materialize(&[source])
            .unwrap();

        let copied = fs::metadata(project.path().join("containers/web/docker-compose.yml")).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&copied), pinned);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let source = write(src.path(), "web/docker-compose.yml", "services: {}\n");
        fs::set_permissions(&source, fs::Permissions::from_mode(0o640)).unwrap();

        Materializer::new(project.path())
            .materialize(&[source])
            .unwrap();

        let copied = fs::metadata(project.path().join("containers/web/docker-compose.yml")).unwrap();
        assert_eq!(copied.permissions().mode() & 0o777, 0o640);
    }

    #[test]
    fn test_collision_last_writer_wins() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let first = write(src.path(), "x/app/docker-compose.yml", "first\n");
        let second = write(src.path(), "y/app/docker-compose.yml", "second\n");

        let records = Materializer::new(project.path())
            .materialize(&[first, second])
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].local_path, records[1].local_path);
        let content =
            fs::read_to_string(project.path().join("containers/app/docker-compose.yml")).unwrap();
        assert_eq!(content, "second\n");
    }

    #[test]
    fn test_collision_rejected_before_copy() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let first = write(src.path(), "x/app/docker-compose.yml", "first\n");
        let second = write(src.path(), "y/app/docker-compose.yml", "second\n");

        let result = Materializer::new(project.path())
            .policy(CollisionPolicy::Reject)
            .materialize(&[first, second]);

        match result {
            Err(CollectorError::ContainerNameCollision { container, .. }) => {
                assert_eq!(container, "app")
            }
            other => panic!("expected collision error, got {:?}", other),
        }
        assert!(!project.path().join("containers").exists());
    }

    #[test]
    fn test_overwrites_existing_copy() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let source = write(src.path(), "db/docker-compose.yml", "new\n");
        write(project.path(), "containers/db/docker-compose.yml", "stale\n");

        Materializer::new(project.path())
            .materialize(&[source])
            .unwrap();

        let content =
            fs::read_to_string(project.path().join("containers/db/docker-compose.yml")).unwrap();
        assert_eq!(content, "new\n");
    }

    #[test]
    fn test_missing_source_fails_with_path() {
        let src = tempdir().unwrap();
        let project = tempdir().unwrap();
        let ok = write(src.path(), "a/docker-compose.yml", "a\n");
        let missing = src.path().join("b/docker-compose.yml");

        let result = Materializer::new(project.path()).materialize(&[ok, missing.clone()]);

        match result {
            Err(CollectorError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(project.path().join("containers/a/docker-compose.yml").exists());
    }
}
