//! Questions and their answer options.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{GoalId, QuestionId, ValidationError};

/// Marker some catalogs put in front of option labels; hidden when displayed.
pub const OPTION_LABEL_MARKER: &str = "X ";

/// Selected value for a question, on a 0-4 scale.
///
/// `0` means "not applicable" and never contributes to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    /// Reserved "not applicable" value.
    pub const NOT_APPLICABLE: Self = Self(0);

    /// Highest value on the scale.
    pub const MAX: Self = Self(4);

    /// Creates an AnswerValue, returning error if outside 0-4.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "answer",
                0,
                i64::from(Self::MAX.0),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if this value contributes to goal scores.
    pub fn is_scored(&self) -> bool {
        *self != Self::NOT_APPLICABLE
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: AnswerValue,
    pub label: String,
}

impl AnswerOption {
    pub fn new(value: AnswerValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Label without the catalog marker prefix.
    pub fn display_label(&self) -> &str {
        self.label
            .strip_prefix(OPTION_LABEL_MARKER)
            .unwrap_or(&self.label)
    }
}

/// An assessable item of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    goals: Vec<GoalId>,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question.
    ///
    /// Goals are deduplicated keeping first occurrence order. Fails when the
    /// text is blank, no goal is referenced, or two options share a value.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        goals: Vec<GoalId>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("question {} text", id)));
        }

        let mut unique_goals: Vec<GoalId> = Vec::with_capacity(goals.len());
        for goal in goals {
            if !unique_goals.contains(&goal) {
                unique_goals.push(goal);
            }
        }
        if unique_goals.is_empty() {
            return Err(ValidationError::empty_field(format!("question {} goals", id)));
        }

        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.value == option.value) {
                return Err(ValidationError::duplicate(
                    format!("question {} options", id),
                    option.value.to_string(),
                ));
            }
        }

        Ok(Self {
            id,
            text,
            goals: unique_goals,
            options,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn goals(&self) -> &[GoalId] {
        &self.goals
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Returns true if the question references the goal.
    pub fn references(&self, goal: &GoalId) -> bool {
        self.goals.contains(goal)
    }

    /// Returns true if `value` is one of this question's option values.
    pub fn accepts(&self, value: AnswerValue) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Finds the option carrying `value`.
    pub fn option(&self, value: AnswerValue) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
