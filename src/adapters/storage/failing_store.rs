//! Failing Key-Value Store for testing.
//!
//! Wraps an in-memory store and injects write failures, so callers can be
//! checked for leaving state untouched when a write is refused.
//!
//! # Example
//!
//! ```ignore
//! let store = FailingKeyValueStore::new();
//! store.fail_on_set(2); // the second `set` from now fails
//! ```

use std::sync::{Arc, Mutex};

use super::InMemoryKeyValueStore;
use crate::ports::{KeyValueStore, StoreError};

/// In-memory store that fails a chosen write.
#[derive(Debug, Clone, Default)]
pub struct FailingKeyValueStore {
    inner: InMemoryKeyValueStore,
    /// Remaining `set` calls before the failing one; `None` when disarmed.
    countdown: Arc<Mutex<Option<usize>>>,
    fail_clear: Arc<Mutex<bool>>,
    sets: Arc<Mutex<usize>>,
}

impl FailingKeyValueStore {
    /// Create an empty store that never fails until armed
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing in-memory store
    pub fn wrapping(inner: InMemoryKeyValueStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Make the `n`th `set` from now fail (1 = the next one). Only that call
    /// fails; later writes succeed again.
    pub fn fail_on_set(&self, n: usize) {
        if let Ok(mut countdown) = self.countdown.lock() {
            *countdown = (n > 0).then_some(n);
        }
    }

    /// Make the next `clear` fail.
    pub fn fail_next_clear(&self) {
        if let Ok(mut flag) = self.fail_clear.lock() {
            *flag = true;
        }
    }

    /// Successful `set` calls so far.
    pub fn set_count(&self) -> usize {
        self.sets.lock().map(|n| *n).unwrap_or(0)
    }

    /// The wrapped store, for inspecting what was actually written.
    pub fn inner(&self) -> &InMemoryKeyValueStore {
        &self.inner
    }
}

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        {
            let mut countdown = self.countdown.lock().map_err(|_| StoreError::LockPoisoned)?;
            match *countdown {
                Some(1) => {
                    *countdown = None;
                    return Err(StoreError::IoError(format!("Simulated failure writing {}", key)));
                }
                Some(n) => *countdown = Some(n - 1),
                None => {}
            }
        }
        self.inner.set(key, value)?;
        let mut sets = self.sets.lock().map_err(|_| StoreError::LockPoisoned)?;
        *sets += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        {
            let mut flag = self.fail_clear.lock().map_err(|_| StoreError::LockPoisoned)?;
            if *flag {
                *flag = false;
                return Err(StoreError::IoError("Simulated failure clearing store".to_string()));
            }
        }
        self.inner.clear()
    }
}
