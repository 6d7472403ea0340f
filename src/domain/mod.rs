//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Questions, answer options and answer sets
//! - `identity` - Identity sheet and namespace derivation
//! - `scoring` - Pure scoring of answers into goal and global scores
//! - `ideas` - Citizen proposals

pub mod catalog;
pub mod foundation;
pub mod ideas;
pub mod identity;
pub mod scoring;
