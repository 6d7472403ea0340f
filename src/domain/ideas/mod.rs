//! Ideas module - Citizen proposals tagged to a goal.

mod idea;

pub use idea::Idea;
