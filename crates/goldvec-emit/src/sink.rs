//! Output sinks.
//!
//! A [`Sink`] stores named artifacts. [`FileSink`] writes each artifact to
//! a temporary file in the output directory and renames it into place, so
//! a reader never observes a partially written file. [`MemorySink`] keeps
//! artifacts in memory for tests.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{EmitError, Result};

/// Record of one written artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name relative to the sink root.
    pub name: String,
    /// Size in bytes.
    pub len: u64,
    /// Lowercase hex SHA-256 of the contents.
    pub sha256: String,
}

impl Artifact {
    pub fn describe(name: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            len: bytes.len() as u64,
            sha256: hex::encode(Sha256::digest(bytes)),
        }
    }
}

/// Destination for named artifacts.
pub trait Sink {
    /// Store `bytes` under `name`, replacing any previous artifact.
    fn put(&self, name: &str, bytes: &[u8]) -> Result<Artifact>;

    /// Fetch the artifact stored under `name`.
    fn get(&self, name: &str) -> Result<Vec<u8>>;

    /// Whether an artifact named `name` exists.
    fn contains(&self, name: &str) -> bool;
}

fn check_name(name: &str) -> Result<()> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
    if !plain {
        return Err(EmitError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Writes artifacts into one directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Open (creating if needed) an output directory.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of an artifact.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Sink for FileSink {
    fn put(&self, name: &str, bytes: &[u8]) -> Result<Artifact> {
        check_name(name)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;

        let path = self.path_of(name);
        tmp.persist(&path).map_err(|e| EmitError::Io(e.error))?;
        debug!(path = %path.display(), len = bytes.len(), "wrote artifact");

        Ok(Artifact::describe(name, bytes))
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        check_name(name)?;
        let path = self.path_of(name);
        fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => EmitError::NotFound(name.to_string()),
            _ => EmitError::Io(e),
        })
    }

    fn contains(&self, name: &str) -> bool {
        check_name(name).is_ok() && self.path_of(name).is_file()
    }
}

/// In-memory sink. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every stored artifact, sorted.
    pub fn names(&self) -> Vec<String> {
        self.artifacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

impl Sink for MemorySink {
    fn put(&self, name: &str, bytes: &[u8]) -> Result<Artifact> {
        check_name(name)?;
        self.artifacts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), bytes.to_vec());
        Ok(Artifact::describe(name, bytes))
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        check_name(name)?;
        self.artifacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
            .ok_or_else(|| EmitError::NotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.artifacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_put_get() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::create(dir.path().join("out")).unwrap();

        let artifact = sink.put("aes.csv", b"Key,IV\n").unwrap();
        assert_eq!(artifact.len, 7);
        assert_eq!(artifact.sha256.len(), 64);
        assert!(sink.contains("aes.csv"));
        assert_eq!(sink.get("aes.csv").unwrap(), b"Key,IV\n");
    }

    #[test]
    fn test_file_sink_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::create(dir.path()).unwrap();
        sink.put("x.dat", b"old contents").unwrap();
        sink.put("x.dat", b"new").unwrap();
        assert_eq!(sink.get("x.dat").unwrap(), b"new");

        // No temporary files left behind.
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rejects_path_names() {
        let sink = MemorySink::new();
        for name in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                sink.put(name, b"x"),
                Err(EmitError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_get_rejects_path_names_in_both_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let file_sink = FileSink::create(dir.path()).unwrap();
        let memory_sink = MemorySink::new();
        for name in ["../x", "a/b", ".."] {
            assert!(matches!(file_sink.get(name), Err(EmitError::InvalidName(_))));
            assert!(matches!(memory_sink.get(name), Err(EmitError::InvalidName(_))));
        }
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::create(dir.path()).unwrap();
        assert!(matches!(sink.get("nope.csv"), Err(EmitError::NotFound(_))));
        assert!(matches!(
            MemorySink::new().get("nope.csv"),
            Err(EmitError::NotFound(_))
        ));
    }

    #[test]
    fn test_artifact_digest() {
        let artifact = Artifact::describe("empty", b"");
        assert_eq!(
            artifact.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_memory_sink_names_sorted() {
        let sink = MemorySink::new();
        sink.put("b.csv", b"1").unwrap();
        sink.put("a.csv", b"2").unwrap();
        assert_eq!(sink.names(), vec!["a.csv", "b.csv"]);
    }
}
