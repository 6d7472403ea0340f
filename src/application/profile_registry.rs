//! ProfileRegistry - Known identities and their names.
//!
//! The registry is persisted separately from answers so switching profiles
//! never requires re-entering identity data.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::persisted_state::{read_or_default, write_json, StorageKeys};
use crate::domain::identity::Identity;
use crate::ports::{KeyValueStore, StoreError};

/// Saved identities, keyed by commune name.
pub struct ProfileRegistry {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    names: Vec<String>,
    by_name: BTreeMap<String, Identity>,
}

impl ProfileRegistry {
    /// Loads the registry; malformed entries fall back to empty.
    pub fn load(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        let stored: Vec<String> = read_or_default(store.as_ref(), &keys.profile_names());
        let by_name: BTreeMap<String, Identity> =
            read_or_default(store.as_ref(), &keys.identities_by_name());

        let mut names: Vec<String> = Vec::with_capacity(stored.len());
        for name in stored {
            if !name.trim().is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }

        tracing::debug!(profiles = names.len(), "Loaded profile registry");

        Self {
            store,
            keys,
            names,
            by_name,
        }
    }

    /// Profile names in insertion order.
    pub fn list_profiles(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn identity(&self, name: &str) -> Option<&Identity> {
        self.by_name.get(name)
    }

    /// Looks up the identity saved under `name`.
    ///
    /// Unknown names return `None` and change nothing.
    pub fn switch_to(&self, name: &str) -> Option<Identity> {
        self.by_name.get(name).cloned()
    }

    /// A fresh, all-empty identity. Confirming the discard of unsaved data is
    /// up to the caller.
    pub fn create_blank(&self) -> Identity {
        Identity::new()
    }

    /// Records `identity` under its commune name.
    ///
    /// No-op when the name is blank. Otherwise the name is appended if new and
    /// the identity stored under it is overwritten. Returns true when the name
    /// was new.
    ///
    /// A new name is written to the name list before its identity. If the
    /// identity write fails the list is restored, and memory is only updated
    /// once both writes succeeded.
    pub fn upsert(&mut self, identity: &Identity) -> Result<bool, StoreError> {
        let name = match identity.commune_name() {
            Some(name) => name.to_string(),
            None => return Ok(false),
        };

        let is_new = !self.contains(&name);

        let mut by_name = self.by_name.clone();
        by_name.insert(name.clone(), identity.clone());

        if is_new {
            let mut names = self.names.clone();
            names.push(name.clone());
            write_json(self.store.as_ref(), &self.keys.profile_names(), &names)?;

            if let Err(e) = write_json(self.store.as_ref(), &self.keys.identities_by_name(), &by_name) {
                self.restore_names();
                return Err(e);
            }
            self.names = names;
            tracing::debug!(profile = %name, "Registered new profile");
        } else {
            write_json(self.store.as_ref(), &self.keys.identities_by_name(), &by_name)?;
        }
        self.by_name = by_name;

        Ok(is_new)
    }

    /// Rewrites the stored name list from memory. A name left listed without
    /// an identity is harmless: `switch_to` ignores it.
    fn restore_names(&self) {
        if let Err(e) = write_json(self.store.as_ref(), &self.keys.profile_names(), &self.names) {
            tracing::warn!("Failed to restore profile names after a failed write: {}", e);
        }
    }
}
