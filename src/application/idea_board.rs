//! IdeaBoard - Append-only wall of citizen proposals.

use serde::Deserialize;
use std::sync::Arc;

use super::persisted_state::{read_or_default, write_json};
use crate::domain::foundation::{DomainError, GoalId, Timestamp};
use crate::domain::ideas::Idea;
use crate::ports::KeyValueStore;

/// Default date pattern for idea stamps (day/month/year).
pub const DEFAULT_DATE_PATTERN: &str = "%d/%m/%Y";

/// Whether ideas are shared by all profiles or kept per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaScope {
    #[default]
    Global,
    PerProfile,
}

/// Most-recent-first list of ideas stored under one key.
pub struct IdeaBoard {
    store: Arc<dyn KeyValueStore>,
    key: String,
    date_pattern: String,
    ideas: Vec<Idea>,
}

impl IdeaBoard {
    /// Opens the board stored under `key`; malformed data yields an empty board.
    pub fn open(store: Arc<dyn KeyValueStore>, key: String, date_pattern: impl Into<String>) -> Self {
        let ideas = read_or_default(store.as_ref(), &key);
        Self {
            store,
            key,
            date_pattern: date_pattern.into(),
            ideas,
        }
    }

    /// Submits an idea stamped with the current time.
    pub fn submit(&mut self, goal: &str, text: &str) -> Result<Idea, DomainError> {
        self.submit_at(goal, text, Timestamp::now())
    }

    /// Submits an idea stamped with `now`.
    ///
    /// Blank goal or text is rejected and the board is left untouched.
    pub fn submit_at(&mut self, goal: &str, text: &str, now: Timestamp) -> Result<Idea, DomainError> {
        let idea = Idea::submit(goal, text, now, &self.date_pattern)?;

        let mut next = Vec::with_capacity(self.ideas.len() + 1);
        next.push(idea.clone());
        next.extend(self.ideas.iter().cloned());
        write_json(self.store.as_ref(), &self.key, &next)?;
        self.ideas = next;

        tracing::debug!(goal = %idea.goal, ideas = self.ideas.len(), "Idea submitted");
        Ok(idea)
    }

    /// Ideas, most recent first.
    pub fn list(&self) -> &[Idea] {
        &self.ideas
    }

    /// Ideas tagged with `goal`, most recent first.
    pub fn for_goal(&self, goal: &GoalId) -> Vec<&Idea> {
        self.ideas
            .iter()
            .filter(|idea| idea.goal_id().as_ref() == Some(goal))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Points the board at another key and reloads from it.
    pub fn rekey(&mut self, key: String) {
        self.ideas = read_or_default(self.store.as_ref(), &key);
        self.key = key;
    }
}
