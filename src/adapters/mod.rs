//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (in-memory, single JSON file)

pub mod storage;

pub use storage::{FailingKeyValueStore, FileKeyValueStore, InMemoryKeyValueStore};
