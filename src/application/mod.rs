//! Application layer - Stateful services over the key-value store.
//!
//! Each service owns its in-memory view and writes through to the store on
//! every change. `Session` is the context object tying them together.
//!
//! - `ProfileRegistry` - Saved identities and their names
//! - `AnswerStore` - Answers of the current namespace
//! - `IdeaBoard` - Citizen ideas, most recent first
//! - `Session` - One assessment over all of the above

mod answer_store;
mod idea_board;
mod persisted_state;
mod profile_registry;
mod session;

pub use answer_store::AnswerStore;
pub use idea_board::{IdeaBoard, IdeaScope, DEFAULT_DATE_PATTERN};
pub use persisted_state::{StorageKeys, DEFAULT_KEY_PREFIX};
pub use profile_registry::ProfileRegistry;
pub use session::{Session, SessionOptions, SwitchOutcome};
