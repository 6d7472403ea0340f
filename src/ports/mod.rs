//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Durable string-keyed storage for profiles, answers and ideas

mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError};
