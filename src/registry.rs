//! Persistent job registry
//!
//! The registry is a single JSON document `{"jobs": [...]}` shared by every
//! gantry invocation. Each append is a whole-document read-modify-write:
//! load everything, push one record, persist the full sequence. The write
//! goes through a temp file in the same directory and an atomic rename, so a
//! crash mid-write never leaves a torn document behind. There is no
//! cross-process locking; two appends racing each other can still lose one
//! record, and callers are expected to invoke gantry sequentially.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::job::JobRecord;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to access job registry at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("job registry at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk document shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryDoc {
    jobs: Vec<JobRecord>,
}

/// File-backed registry of job records
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load every persisted job record, in insertion order.
    ///
    /// A missing file is an empty registry, not an error. A file that exists
    /// but does not parse as the registry document fails fast; silently
    /// treating it as empty would discard prior work on the next append.
    pub fn load(&self) -> Result<Vec<JobRecord>, RegistryError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    operation = "registry.load",
                    status = "missing",
                    path = %self.path.display(),
                    "no registry document yet, starting empty"
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(RegistryError::Io {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        let doc: RegistryDoc =
            serde_json::from_str(&data).map_err(|err| RegistryError::Malformed {
                path: self.path.clone(),
                source: err,
            })?;

        debug!(
            operation = "registry.load",
            status = "success",
            entry_count = doc.jobs.len(),
            "loaded registry"
        );

        Ok(doc.jobs)
    }

    /// Append one record and persist the whole updated sequence.
    pub fn append(&self, record: JobRecord) -> Result<(), RegistryError> {
        let mut jobs = self.load()?;
        jobs.push(record);
        let count = jobs.len();

        self.persist(RegistryDoc { jobs })?;

        debug!(
            operation = "registry.append",
            status = "success",
            entry_count = count,
            path = %self.path.display(),
            "persisted registry"
        );

        Ok(())
    }

    /// Write the full document via temp-file-and-rename.
    fn persist(&self, doc: RegistryDoc) -> Result<(), RegistryError> {
        let io_err = |source| RegistryError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = self.path.parent().unwrap_or_else(|| std::path::Path::new("."));
        fs::create_dir_all(parent).map_err(io_err)?;

        // Stable 2-space indentation keeps registry diffs readable
        let json = serde_json::to_string_pretty(&doc).map_err(|err| RegistryError::Malformed {
            path: self.path.clone(),
            source: err,
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(command: &str) -> JobRecord {
        JobRecord {
            inputs: Some(vec!["in".into()]),
            outputs: Some(vec!["out".into()]),
            command: Some(command.into()),
            description: None,
            pipeline: None,
            ci_stage: None,
            timeout: None,
            timeout_ok: false,
            ok_returns: None,
        }
    }

    #[test]
    fn missing_file_loads_as_empty_registry() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::new(dir.path().join("jobs.json"));
        assert!(registry.load().unwrap().is_empty());
    }

    #[test]
    fn append_creates_the_document_and_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("jobs.json");
        let registry = Registry::new(path.clone());

        registry.append(record("echo hi")).unwrap();

        assert!(path.exists());
        let loaded = registry.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].command.as_deref(), Some("echo hi"));
    }

    #[test]
    fn sequential_appends_preserve_order() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::new(dir.path().join("jobs.json"));

        registry.append(record("first")).unwrap();
        registry.append(record("second")).unwrap();
        registry.append(record("third")).unwrap();

        let commands: Vec<_> = registry
            .load()
            .unwrap()
            .into_iter()
            .map(|r| r.command.unwrap())
            .collect();
        assert_eq!(commands, ["first", "second", "third"]);
    }

    #[test]
    fn malformed_document_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, "{\"jobs\": not json").unwrap();

        let registry = Registry::new(path);
        let err = registry.load().unwrap_err();
        assert!(matches!(err, RegistryError::Malformed { .. }));
        assert!(err.to_string().contains("malformed"));

        // An append against a corrupt document must not clobber it
        assert!(registry.append(record("echo hi")).is_err());
    }

    #[test]
    fn document_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");
        let registry = Registry::new(path.clone());

        registry.append(record("echo hi")).unwrap();

        let data = fs::read_to_string(&path).unwrap();
        assert!(data.starts_with("{\n  \"jobs\""));
        assert!(data.ends_with('\n'));
    }
}
