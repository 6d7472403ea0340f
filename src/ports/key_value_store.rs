//! Key-Value Store Port - Durable string storage for session state.
//!
//! The core only needs `get`, `set` and `clear`. Values are JSON documents
//! but the port itself treats them as opaque strings.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize value for key '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for a persistent string-keyed store
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` when nothing is stored under the key
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every key
    fn clear(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_serialization_names_key() {
        let err = StoreError::SerializationFailed {
            key: "sdgx:ideas".to_string(),
            reason: "bad float".to_string(),
        };
        assert!(err.to_string().contains("sdgx:ideas"));
    }

    #[test]
    fn store_error_maps_to_storage_domain_error() {
        let err: DomainError = StoreError::LockPoisoned.into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn store_error_io_displays() {
        let err = StoreError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
