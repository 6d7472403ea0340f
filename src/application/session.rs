//! Session - The explicit context of one assessment.
//!
//! Ties the identity being edited, the profile registry, the answers of the
//! current namespace and the idea board together over one key-value store.
//! Every mutation writes through before returning.

use once_cell::unsync::OnceCell;
use std::sync::Arc;

use super::idea_board::{IdeaBoard, IdeaScope, DEFAULT_DATE_PATTERN};
use super::persisted_state::{read_or_default, write_json, StorageKeys};
use super::{AnswerStore, ProfileRegistry};
use crate::domain::catalog::{AnswerValue, QuestionCatalog};
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::domain::ideas::Idea;
use crate::domain::identity::{namespace_for, Identity, Namespace};
use crate::domain::scoring::{ScoreReport, ScoringEngine};
use crate::ports::KeyValueStore;

/// Knobs of a session that do not change while it is open.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub keys: StorageKeys,
    pub idea_scope: IdeaScope,
    /// chrono pattern used to stamp ideas.
    pub date_pattern: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            idea_scope: IdeaScope::default(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

/// Result of a profile switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    UnknownProfile,
}

pub struct Session {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<QuestionCatalog>,
    options: SessionOptions,
    identity: Identity,
    registry: ProfileRegistry,
    answers: AnswerStore,
    ideas: IdeaBoard,
    report: OnceCell<ScoreReport>,
}

impl Session {
    /// Restores the last session from `store`.
    ///
    /// Missing or malformed state starts blank. Stored answers the catalog
    /// no longer accepts are dropped.
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<QuestionCatalog>,
        options: SessionOptions,
    ) -> Self {
        let keys = options.keys.clone();
        let identity: Identity = read_or_default(store.as_ref(), &keys.current_identity());
        let registry = ProfileRegistry::load(store.clone(), keys.clone());

        let namespace = namespace_for(&identity);
        let mut answers = AnswerStore::open(store.clone(), keys, namespace.clone());
        answers.retain_valid(&catalog);

        let ideas = IdeaBoard::open(
            store.clone(),
            Self::ideas_key(&options, &namespace),
            options.date_pattern.clone(),
        );

        tracing::debug!(
            namespace = %namespace,
            profiles = registry.list_profiles().len(),
            answers = answers.answered_count(),
            ideas = ideas.len(),
            "Session opened"
        );

        Self {
            store,
            catalog,
            options,
            identity,
            registry,
            answers,
            ideas,
            report: OnceCell::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn namespace(&self) -> &Namespace {
        self.answers.namespace()
    }

    pub fn profiles(&self) -> &[String] {
        self.registry.list_profiles()
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn ideas(&self) -> &IdeaBoard {
        &self.ideas
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Sets one identity field and registers the identity under its name.
    ///
    /// Answers are reloaded when the commune name now maps to another
    /// namespace.
    pub fn update_identity_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        let mut identity = self.identity.clone();
        identity.set(field, value);
        self.replace_identity(identity)
    }

    /// Replaces the whole identity being edited.
    ///
    /// The registry is updated before the current identity is saved, so a
    /// failed write never leaves the store pointing at an identity the
    /// session did not adopt.
    pub fn replace_identity(&mut self, identity: Identity) -> Result<(), DomainError> {
        self.registry.upsert(&identity)?;
        write_json(
            self.store.as_ref(),
            &self.options.keys.current_identity(),
            &identity,
        )?;
        self.identity = identity;

        let namespace = namespace_for(&self.identity);
        if &namespace != self.answers.namespace() {
            self.load_namespace(namespace);
        }
        Ok(())
    }

    /// Makes the profile saved under `name` current.
    ///
    /// Unknown names change nothing. A known name always reloads its
    /// answers, even when it is already current.
    pub fn switch_profile(&mut self, name: &str) -> Result<SwitchOutcome, DomainError> {
        let identity = match self.registry.switch_to(name) {
            Some(identity) => identity,
            None => {
                tracing::debug!(profile = name, "Ignoring switch to unknown profile");
                return Ok(SwitchOutcome::UnknownProfile);
            }
        };

        write_json(
            self.store.as_ref(),
            &self.options.keys.current_identity(),
            &identity,
        )?;
        self.identity = identity;
        self.load_namespace(namespace_for(&self.identity));

        tracing::debug!(profile = name, namespace = %self.namespace(), "Switched profile");
        Ok(SwitchOutcome::Switched)
    }

    /// Starts a blank identity on the default namespace. Saved profiles are
    /// kept.
    pub fn new_profile(&mut self) -> Result<(), DomainError> {
        let identity = self.registry.create_blank();
        write_json(
            self.store.as_ref(),
            &self.options.keys.current_identity(),
            &identity,
        )?;
        self.identity = identity;
        self.load_namespace(Namespace::default());
        Ok(())
    }

    /// True once every required identity field is filled in.
    pub fn can_start_questionnaire(&self) -> bool {
        self.identity.is_fully_identified()
    }

    /// Errors with the missing fields while the identity is incomplete.
    pub fn ensure_questionnaire_open(&self) -> Result<(), DomainError> {
        let missing = self.identity.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(DomainError::new(
            ErrorCode::IdentityIncomplete,
            format!("{} identity fields are still empty", missing.len()),
        )
        .with_detail("missing", missing.join(", ")))
    }

    /// Records the answer to one question.
    ///
    /// The value must be one of the question's options.
    pub fn answer(&mut self, question: QuestionId, value: u8) -> Result<(), DomainError> {
        let entry = self.catalog.get(question).ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question {} not found", question),
            )
        })?;

        let value = AnswerValue::try_new(value)
            .ok()
            .filter(|v| entry.accepts(*v))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidAnswer,
                    format!("Value {} is not an option of question {}", value, question),
                )
                .with_detail("question", question.to_string())
                .with_detail("value", value.to_string())
            })?;

        self.answers.set(question, value)?;
        self.report.take();
        Ok(())
    }

    /// Scores of the current answers, computed once per change.
    pub fn report(&self) -> &ScoreReport {
        self.report
            .get_or_init(|| ScoringEngine::score(&self.catalog, self.answers.answers()))
    }

    pub fn submit_idea(&mut self, goal: &str, text: &str) -> Result<Idea, DomainError> {
        self.ideas.submit(goal, text)
    }

    /// Wipes every persisted key and returns to a blank session.
    pub fn reset_all(&mut self) -> Result<(), DomainError> {
        self.store.clear()?;

        let keys = self.options.keys.clone();
        let namespace = Namespace::default();
        self.identity = Identity::new();
        self.registry = ProfileRegistry::load(self.store.clone(), keys.clone());
        self.answers = AnswerStore::open(self.store.clone(), keys, namespace.clone());
        self.ideas = IdeaBoard::open(
            self.store.clone(),
            Self::ideas_key(&self.options, &namespace),
            self.options.date_pattern.clone(),
        );
        self.report.take();

        tracing::info!("All stored data cleared");
        Ok(())
    }

    fn load_namespace(&mut self, namespace: Namespace) {
        self.answers.switch_namespace(namespace.clone());
        self.answers.retain_valid(&self.catalog);
        if self.options.idea_scope == IdeaScope::PerProfile {
            self.ideas.rekey(Self::ideas_key(&self.options, &namespace));
        }
        self.report.take();
    }

    fn ideas_key(options: &SessionOptions, namespace: &Namespace) -> String {
        match options.idea_scope {
            IdeaScope::Global => options.keys.ideas(),
            IdeaScope::PerProfile => options.keys.ideas_for(namespace),
        }
    }
}
