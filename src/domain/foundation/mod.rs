//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the SDG-X domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{natural_cmp, GoalId, IdeaId, QuestionId, GOAL_LABEL_PREFIX};
pub use timestamp::{is_valid_date_pattern, Timestamp, FALLBACK_DATE_PATTERN};
