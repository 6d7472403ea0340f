//! Scoring module - Pure computation of goal and global scores.
//!
//! All functions are pure (no side effects) and stateless. They take the
//! catalog and an answer set and return a `ScoreReport`; callers decide when
//! to recompute.

mod band;
mod engine;

pub use band::ScoreBand;
pub use engine::{round2, GoalScore, ScoreReport, ScoringEngine, LOW_PERFORMANCE_THRESHOLD};
