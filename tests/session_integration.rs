//! Integration tests for a session backed by the file store.
//!
//! Each test opens a fresh store in a temporary directory, drives a session
//! through a user flow, then reopens the store to check what was persisted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use sdgx::adapters::storage::FileKeyValueStore;
use sdgx::application::{IdeaScope, Session, SessionOptions, StorageKeys, SwitchOutcome};
use sdgx::domain::catalog::QuestionCatalog;
use sdgx::domain::foundation::{ErrorCode, GoalId, QuestionId};
use sdgx::domain::identity::{Namespace, COMMUNE_NAME_FIELD};
use sdgx::ports::KeyValueStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn sample_catalog() -> Arc<QuestionCatalog> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("questions.json");
    Arc::new(QuestionCatalog::load(path).unwrap())
}

fn open_session(path: &Path, options: SessionOptions) -> Session {
    let store = FileKeyValueStore::open(path).unwrap();
    Session::open(Arc::new(store), sample_catalog(), options)
}

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("sdgx-store.json")
}

fn answer_of(session: &Session, id: u32) -> Option<u8> {
    session
        .answers()
        .get(QuestionId::new(id))
        .map(|value| value.value())
}

// =============================================================================
// Profiles and answers
// =============================================================================

#[test]
fn switching_profiles_exposes_saved_answers_without_leakage() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.update_identity_field(COMMUNE_NAME_FIELD, "Beta").unwrap();
    session.answer(QuestionId::new(1), 4).unwrap();

    session.new_profile().unwrap();
    session.update_identity_field(COMMUNE_NAME_FIELD, "Alpha").unwrap();
    assert_eq!(session.answers().answered_count(), 0);
    session.answer(QuestionId::new(2), 1).unwrap();

    let outcome = session.switch_profile("Beta").unwrap();

    assert_eq!(outcome, SwitchOutcome::Switched);
    assert_eq!(session.namespace().as_str(), "beta");
    assert_eq!(answer_of(&session, 1), Some(4));
    assert_eq!(answer_of(&session, 2), None);
    assert_eq!(session.answers().answered_count(), 1);
}

#[test]
fn state_survives_reopening_the_store() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    {
        let mut session = open_session(&path, SessionOptions::default());
        session.update_identity_field(COMMUNE_NAME_FIELD, "Saint Malo").unwrap();
        session.answer(QuestionId::new(1), 3).unwrap();
        session.answer(QuestionId::new(4), 1).unwrap();
    }

    let session = open_session(&path, SessionOptions::default());
    assert_eq!(session.identity().commune_name(), Some("Saint Malo"));
    assert_eq!(session.profiles(), &["Saint Malo".to_string()]);
    assert_eq!(session.namespace().as_str(), "saint_malo");
    assert_eq!(answer_of(&session, 1), Some(3));
    assert_eq!(answer_of(&session, 4), Some(1));
}

#[test]
fn unknown_profile_switch_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.update_identity_field(COMMUNE_NAME_FIELD, "Alpha").unwrap();
    session.answer(QuestionId::new(3), 4).unwrap();

    let outcome = session.switch_profile("Nowhere").unwrap();

    assert_eq!(outcome, SwitchOutcome::UnknownProfile);
    assert_eq!(session.identity().commune_name(), Some("Alpha"));
    assert_eq!(answer_of(&session, 3), Some(4));
}

#[test]
fn names_normalizing_alike_share_answers() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.update_identity_field(COMMUNE_NAME_FIELD, "Le Havre").unwrap();
    session.answer(QuestionId::new(2), 3).unwrap();

    session.new_profile().unwrap();
    session.update_identity_field(COMMUNE_NAME_FIELD, "LE  HAVRE").unwrap();

    assert_eq!(session.namespace().as_str(), "le_havre");
    assert_eq!(answer_of(&session, 2), Some(3));
}

#[test]
fn malformed_answers_on_disk_load_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let keys = StorageKeys::default();

    {
        let store = FileKeyValueStore::open(&path).unwrap();
        store
            .set(&keys.answers(&Namespace::default()), "{\"1\": \"lots\"}")
            .unwrap();
        store.set(&keys.current_identity(), "[]").unwrap();
    }

    let session = open_session(&path, SessionOptions::default());
    assert!(session.identity().is_empty());
    assert_eq!(session.answers().answered_count(), 0);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn report_follows_the_active_profile() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    assert_eq!(session.report().global_score, 0.0);
    assert!(session.report().goal_scores.is_empty());

    session.update_identity_field(COMMUNE_NAME_FIELD, "Alpha").unwrap();
    session.answer(QuestionId::new(1), 4).unwrap();
    session.answer(QuestionId::new(2), 1).unwrap();

    let goals: Vec<&str> = session
        .report()
        .goal_scores
        .iter()
        .map(|score| score.goal.as_str())
        .collect();
    assert_eq!(goals, vec!["3", "6", "7", "13"]);
    assert_eq!(session.report().global_score, 2.5);
    let low: Vec<&GoalId> = session
        .report()
        .low_performing
        .iter()
        .map(|score| &score.goal)
        .collect();
    assert_eq!(
        low,
        vec![&GoalId::new("7").unwrap(), &GoalId::new("13").unwrap()]
    );

    session.new_profile().unwrap();
    assert!(session.report().is_empty());
}

#[test]
fn not_applicable_answer_does_not_count() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.answer(QuestionId::new(3), 0).unwrap();
    session.answer(QuestionId::new(4), 3).unwrap();

    let report = session.report();
    assert_eq!(report.goal_scores.len(), 1);
    assert_eq!(report.goal_scores[0].goal.as_str(), "16");
    assert_eq!(report.goal_scores[0].sample_count, 1);
    assert_eq!(report.global_score, 3.0);
}

#[test]
fn answers_outside_the_options_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    let err = session.answer(QuestionId::new(2), 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidAnswer);

    let err = session.answer(QuestionId::new(40), 2).unwrap_err();
    assert_eq!(err.code, ErrorCode::QuestionNotFound);

    assert_eq!(session.answers().answered_count(), 0);
}

// =============================================================================
// Ideas
// =============================================================================

#[test]
fn empty_idea_is_rejected_and_list_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.submit_idea("11", "Car-free market day").unwrap();

    let err = session.submit_idea("11", "").unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyField);
    assert_eq!(session.ideas().len(), 1);

    let reopened = open_session(&path, SessionOptions::default());
    assert_eq!(reopened.ideas().len(), 1);
}

#[test]
fn ideas_keep_most_recent_first_across_reloads() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    {
        let mut session = open_session(&path, SessionOptions::default());
        session.submit_idea("ODD 6", "Rain barrels").unwrap();
        session.submit_idea("7", "Solar roofs").unwrap();
    }

    let session = open_session(&path, SessionOptions::default());
    let ideas: Vec<(&str, &str)> = session
        .ideas()
        .list()
        .iter()
        .map(|idea| (idea.goal.as_str(), idea.text.as_str()))
        .collect();
    assert_eq!(ideas, vec![("ODD 7", "Solar roofs"), ("ODD 6", "Rain barrels")]);
}

#[test]
fn per_profile_ideas_are_isolated() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let options = SessionOptions {
        idea_scope: IdeaScope::PerProfile,
        ..SessionOptions::default()
    };

    let mut session = open_session(&path, options.clone());
    session.update_identity_field(COMMUNE_NAME_FIELD, "Alpha").unwrap();
    session.submit_idea("6", "Rain barrels").unwrap();

    session.new_profile().unwrap();
    session.update_identity_field(COMMUNE_NAME_FIELD, "Beta").unwrap();
    assert!(session.ideas().is_empty());

    let reopened = open_session(&path, options);
    assert_eq!(reopened.identity().commune_name(), Some("Beta"));
    assert!(reopened.ideas().is_empty());
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn reset_all_removes_the_store_file() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut session = open_session(&path, SessionOptions::default());
    session.update_identity_field(COMMUNE_NAME_FIELD, "Alpha").unwrap();
    session.answer(QuestionId::new(1), 2).unwrap();
    session.submit_idea("3", "Free health checks").unwrap();
    assert!(path.exists());

    session.reset_all().unwrap();

    assert!(!path.exists());
    assert!(session.profiles().is_empty());
    assert!(session.ideas().is_empty());

    let reopened = open_session(&path, SessionOptions::default());
    assert!(reopened.identity().is_empty());
    assert!(reopened.profiles().is_empty());
    assert_eq!(reopened.answers().answered_count(), 0);
}
