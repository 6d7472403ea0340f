//! Citizen idea value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, IdeaId, Timestamp, ValidationError};

/// A free-text proposal attached to a goal. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    /// Goal label, e.g. "ODD 3".
    pub goal: String,
    pub text: String,
    pub created_at: Timestamp,
    /// `created_at` rendered with the configured date pattern at submission.
    pub date: String,
}

impl Idea {
    /// Validates a submission and stamps it with `now`.
    ///
    /// Rejects a blank goal or blank text. The goal is stored in label form
    /// and the text is trimmed.
    pub fn submit(
        goal: &str,
        text: &str,
        now: Timestamp,
        date_pattern: &str,
    ) -> Result<Self, ValidationError> {
        if goal.trim().is_empty() {
            return Err(ValidationError::empty_field("goal"));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        let goal = GoalId::parse_label(goal)?;

        Ok(Self {
            id: IdeaId::new(),
            goal: goal.label(),
            text: text.to_string(),
            created_at: now,
            date: now.format_local_date(date_pattern),
        })
    }

    /// The goal this idea is tagged with.
    pub fn goal_id(&self) -> Option<GoalId> {
        GoalId::parse_label(&self.goal).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERN: &str = "%d/%m/%Y";

    #[test]
    fn submit_normalizes_goal_and_text() {
        let idea = Idea::submit("3", "  More shaded bus stops ", Timestamp::now(), PATTERN).unwrap();
        assert_eq!(idea.goal, "ODD 3");
        assert_eq!(idea.text, "More shaded bus stops");
        assert_eq!(idea.goal_id(), Some(GoalId::new("3").unwrap()));
    }

    #[test]
    fn submit_keeps_label_form() {
        let idea = Idea::submit("ODD 11", "Car-free Sundays", Timestamp::now(), PATTERN).unwrap();
        assert_eq!(idea.goal, "ODD 11");
    }

    #[test]
    fn submit_rejects_blank_goal() {
        let err = Idea::submit("  ", "Text", Timestamp::now(), PATTERN).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("goal"));
    }

    #[test]
    fn submit_rejects_blank_text() {
        let err = Idea::submit("4", " \n ", Timestamp::now(), PATTERN).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("text"));
    }

    #[test]
    fn submit_renders_date() {
        let now = Timestamp::from_unix_secs(1705320000).unwrap();
        let idea = Idea::submit("4", "Text", now, "%Y").unwrap();
        assert_eq!(idea.date, "2024");
        assert_eq!(idea.created_at, now);
    }
}
