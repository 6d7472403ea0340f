//! Answers of one profile, keyed by question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AnswerValue, QuestionCatalog};
use crate::domain::foundation::QuestionId;

/// Mapping question -> selected value, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerValue> {
        self.values.get(&question).copied()
    }

    /// Records a value, returning the previous one.
    pub fn set(&mut self, question: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.values.insert(question, value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.values.iter().map(|(q, v)| (*q, *v))
    }

    /// Drops entries whose question is unknown or whose value is not one of
    /// the question's options. Returns the dropped question ids.
    pub fn retain_valid(&mut self, catalog: &QuestionCatalog) -> Vec<QuestionId> {
        let mut dropped = Vec::new();
        self.values.retain(|question, value| {
            let valid = catalog
                .get(*question)
                .map_or(false, |q| q.accepts(*value));
            if !valid {
                dropped.push(*question);
            }
            valid
        });
        dropped
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: u8) -> AnswerValue {
        AnswerValue::try_new(v).unwrap()
    }

    #[test]
    fn serializes_with_string_keys() {
        let answers: AnswerSet = [(QuestionId::new(1), value(4)), (QuestionId::new(12), value(0))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":4,"12":0}"#);

        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }

    #[test]
    fn deserialization_rejects_bad_shapes() {
        assert!(serde_json::from_str::<AnswerSet>(r#"{"1":7}"#).is_err());
        assert!(serde_json::from_str::<AnswerSet>(r#"{"one":2}"#).is_err());
        assert!(serde_json::from_str::<AnswerSet>(r#"[1,2]"#).is_err());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.set(QuestionId::new(3), value(1)), None);
        assert_eq!(answers.set(QuestionId::new(3), value(2)), Some(value(1)));
        assert_eq!(answers.get(QuestionId::new(3)), Some(value(2)));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn retain_valid_drops_unknown_and_unlisted_values() {
        let catalog = QuestionCatalog::from_json_str(
            r#"[{"id":1,"question":"Q","odds":["1"],"options":[{"val":0,"text":"N/A"},{"val":2,"text":"Partly"}]}]"#,
        )
        .unwrap();

        let mut answers: AnswerSet = [
            (QuestionId::new(1), value(2)),
            (QuestionId::new(2), value(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(answers.retain_valid(&catalog), vec![QuestionId::new(2)]);

        answers.set(QuestionId::new(1), value(4));
        assert_eq!(answers.retain_valid(&catalog), vec![QuestionId::new(1)]);
        assert!(answers.is_empty());
    }
}
