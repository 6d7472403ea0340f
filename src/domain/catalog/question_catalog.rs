//! Question catalog loading and lookup.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::question::{AnswerOption, AnswerValue, Question};
use crate::domain::foundation::{GoalId, QuestionId, ValidationError};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// External catalog entry: `{ id, question, odds, options: [{ val, text }] }`.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: u32,
    question: String,
    odds: Vec<RawGoal>,
    options: Vec<RawOption>,
}

/// Goal ids appear as strings in most catalogs but bare numbers are tolerated.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGoal {
    Text(String),
    Number(u64),
}

#[derive(Debug, Deserialize)]
struct RawOption {
    val: i64,
    text: String,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, ValidationError> {
        let id = QuestionId::new(self.id);

        let goals = self
            .odds
            .into_iter()
            .map(|goal| match goal {
                RawGoal::Text(s) => GoalId::new(s),
                RawGoal::Number(n) => GoalId::new(n.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let options = self
            .options
            .into_iter()
            .map(|opt| -> Result<AnswerOption, ValidationError> {
                let value = u8::try_from(opt.val)
                    .ok()
                    .and_then(|v| AnswerValue::try_new(v).ok())
                    .ok_or_else(|| {
                        ValidationError::out_of_range(
                            format!("question {} option value", id),
                            0,
                            i64::from(AnswerValue::MAX.value()),
                            opt.val,
                        )
                    })?;
                Ok(AnswerOption::new(value, opt.text))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Question::new(id, self.question, goals, options)
    }
}

/// Ordered, immutable list of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if index.insert(question.id(), position).is_some() {
                return Err(ValidationError::duplicate(
                    "question id",
                    question.id().to_string(),
                ));
            }
        }
        Ok(Self { questions, index })
    }

    /// Parses the external JSON catalog format.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawQuestion> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parses the same catalog shape written as YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawQuestion> =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Loads a catalog file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };
        tracing::debug!(
            path = %path.display(),
            questions = catalog.len(),
            "Loaded question catalog"
        );
        Ok(catalog)
    }

    fn from_raw(raw: Vec<RawQuestion>) -> Result<Self, CatalogError> {
        let questions = raw
            .into_iter()
            .map(RawQuestion::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions)?)
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.index.get(&id).map(|&i| &self.questions[i])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Every goal referenced by at least one question, in numeric order.
    pub fn goals(&self) -> Vec<GoalId> {
        let mut goals: Vec<GoalId> = self
            .questions
            .iter()
            .flat_map(|q| q.goals().iter().cloned())
            .collect();
        goals.sort();
        goals.dedup();
        goals
    }

    /// Questions that reference `goal`, in catalog order.
    pub fn questions_for_goal<'a>(&'a self, goal: &'a GoalId) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.references(goal))
    }
}
