//! Scoring Engine - Goal averages, global index and low performers.

use serde::Serialize;
use std::collections::BTreeMap;

use super::band::ScoreBand;
use crate::domain::catalog::{AnswerSet, QuestionCatalog};
use crate::domain::foundation::GoalId;

/// Goals averaging strictly below this value are flagged as low performing.
pub const LOW_PERFORMANCE_THRESHOLD: f64 = 2.5;

/// Average score of one goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalScore {
    pub goal: GoalId,
    /// Mean of scored answers, rounded to 2 decimals.
    pub average: f64,
    pub sample_count: usize,
}

impl GoalScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_average(self.average)
    }

    pub fn is_low_performing(&self) -> bool {
        self.average < LOW_PERFORMANCE_THRESHOLD
    }
}

/// Result of scoring one answer set against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Goals with at least one scored answer, in numeric goal order.
    pub goal_scores: Vec<GoalScore>,
    /// Mean of goal averages, rounded to 2 decimals; 0 when nothing is scored.
    pub global_score: f64,
    /// Subset of `goal_scores` below the threshold, same order.
    pub low_performing: Vec<GoalScore>,
}

impl ScoreReport {
    pub fn score_for(&self, goal: &GoalId) -> Option<&GoalScore> {
        self.goal_scores.iter().find(|s| &s.goal == goal)
    }

    /// True when no answer contributed to any goal.
    pub fn is_empty(&self) -> bool {
        self.goal_scores.is_empty()
    }

    pub fn global_band(&self) -> Option<ScoreBand> {
        (!self.is_empty()).then(|| ScoreBand::for_average(self.global_score))
    }
}

/// Stateless scorer.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores `answers` against `catalog`.
    ///
    /// Absent answers and the "not applicable" value are skipped. Every goal
    /// a question references receives that question's value.
    pub fn score(catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoreReport {
        // BTreeMap ordering on GoalId is numeric-aware.
        let mut totals: BTreeMap<&GoalId, (u64, usize)> = BTreeMap::new();

        for question in catalog.questions() {
            let value = match answers.get(question.id()) {
                Some(value) if value.is_scored() => value,
                _ => continue,
            };
            for goal in question.goals() {
                let entry = totals.entry(goal).or_insert((0, 0));
                entry.0 += u64::from(value.value());
                entry.1 += 1;
            }
        }

        let goal_scores: Vec<GoalScore> = totals
            .into_iter()
            .map(|(goal, (sum, count))| GoalScore {
                goal: goal.clone(),
                average: round2(sum as f64 / count as f64),
                sample_count: count,
            })
            .collect();

        let global_score = if goal_scores.is_empty() {
            0.0
        } else {
            let total: f64 = goal_scores.iter().map(|s| s.average).sum();
            round2(total / goal_scores.len() as f64)
        };

        let low_performing = goal_scores
            .iter()
            .filter(|s| s.is_low_performing())
            .cloned()
            .collect();

        ScoreReport {
            goal_scores,
            global_score,
            low_performing,
        }
    }
}

/// Rounds to 2 decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
