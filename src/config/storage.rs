//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::{StorageKeys, DEFAULT_KEY_PREFIX};

/// Where session state is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Store backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file used by the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Prefix of every stored key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

/// Key-value store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Nothing survives the process
    Memory,
    #[default]
    File,
}

impl StorageConfig {
    /// Storage keys built from the configured prefix
    pub fn keys(&self) -> StorageKeys {
        StorageKeys::new(self.key_prefix.clone())
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_prefix.trim().is_empty() || self.key_prefix.contains(':') {
            return Err(ValidationError::InvalidKeyPrefix);
        }
        if self.backend == StorageBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/sdgx-store.json")
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}
