//! Key-value blob storage

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// A string key-value store holding serialized documents
///
/// The seam the engine persists through; tests and embedders supply
/// whatever backing they like.
pub trait BlobStore {
    /// Read the blob under `key`, if present
    fn read(&self, key: &str) -> Option<String>;
    /// Write the blob under `key`
    ///
    /// # Errors
    /// Backend write failures.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// The backing directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.read("k").is_none());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.read("order").is_none());
        store.write("order", "{}").unwrap();
        assert_eq!(store.read("order").as_deref(), Some("{}"));
    }
}
