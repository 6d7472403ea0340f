//! Storage keys and typed JSON access over the key-value store.
//!
//! Reads never fail: missing, unreadable or malformed values fall back to the
//! type's default and are logged. Writes propagate store errors.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::identity::Namespace;
use crate::ports::{KeyValueStore, StoreError};

/// Prefix used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "sdgx";

/// Builds the namespaced keys of every persisted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Identity currently being edited.
    pub fn current_identity(&self) -> String {
        self.key("current-identity")
    }

    /// Ordered list of known profile names.
    pub fn profile_names(&self) -> String {
        self.key("profile-names")
    }

    /// Map profile name -> identity.
    pub fn identities_by_name(&self) -> String {
        self.key("identities-by-name")
    }

    /// Answer set of one namespace.
    pub fn answers(&self, namespace: &Namespace) -> String {
        self.key(&format!("answers:{}", namespace))
    }

    /// Idea board shared by every profile.
    pub fn ideas(&self) -> String {
        self.key("ideas")
    }

    /// Idea board of a single namespace.
    pub fn ideas_for(&self, namespace: &Namespace) -> String {
        self.key(&format!("ideas:{}", namespace))
    }

    fn key(&self, name: &str) -> String {
        format!("{}:{}", self.prefix, name)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

/// Reads and decodes `key`, falling back to `T::default()`.
pub(crate) fn read_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, "Malformed persisted state, using default: {}", e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, "Failed to read persisted state, using default: {}", e);
            T::default()
        }
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub(crate) fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| StoreError::SerializationFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &json)
}
