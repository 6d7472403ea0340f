//! File-based Key-Value Store Adapter
//!
//! Keeps all keys in a single JSON document on disk, rewritten on every
//! change. A missing file is an empty store; an unreadable one is logged and
//! replaced on the next write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::ports::{KeyValueStore, StoreError};

/// File-backed key-value store
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open (or create on first write) the store at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::open("./data/sdgx-store.json")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = Self::read_entries(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened file store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Store file is malformed, starting empty: {}",
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Write all entries atomically using a temporary file
    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::IoError(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            StoreError::SerializationFailed {
                key: "*".to_string(),
                reason: e.to_string(),
            }
        })?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write temporary file: {}", e)))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &self.path)
            .map_err(|e| StoreError::IoError(format!("Failed to rename file: {}", e)))?;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        // Memory only changes once the file write succeeded.
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;

        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| StoreError::IoError(format!("Failed to delete file: {}", e)))?;
        }
        entries.clear();
        Ok(())
    }
}
