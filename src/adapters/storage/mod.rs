//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores every key in one JSON file on disk
//! - **InMemoryKeyValueStore** - Stores keys in memory (testing/development)
//! - **FailingKeyValueStore** - In-memory store with injected write failures (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Durable: one JSON document
//! let store = FileKeyValueStore::open("./data/sdgx-store.json")?;
//!
//! // Testing: in-memory store
//! let store = InMemoryKeyValueStore::new();
//! ```

mod failing_store;
mod file_store;
mod in_memory_store;

pub use failing_store::FailingKeyValueStore;
pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;
