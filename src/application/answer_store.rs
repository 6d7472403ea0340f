//! AnswerStore - The active profile's answers, persisted per namespace.

use std::sync::Arc;

use super::persisted_state::{read_or_default, write_json, StorageKeys};
use crate::domain::catalog::{AnswerSet, AnswerValue, QuestionCatalog};
use crate::domain::foundation::QuestionId;
use crate::domain::identity::{namespace_for, Identity, Namespace};
use crate::ports::{KeyValueStore, StoreError};

/// In-memory answers of one namespace, written through on every change.
pub struct AnswerStore {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    namespace: Namespace,
    answers: AnswerSet,
}

impl AnswerStore {
    /// Opens the store on `namespace`, loading whatever was saved there.
    pub fn open(store: Arc<dyn KeyValueStore>, keys: StorageKeys, namespace: Namespace) -> Self {
        let mut answer_store = Self {
            store,
            keys,
            namespace: namespace.clone(),
            answers: AnswerSet::new(),
        };
        answer_store.answers = answer_store.load(&namespace);
        answer_store
    }

    /// Namespace an identity's answers live in.
    pub fn namespace_for(identity: &Identity) -> Namespace {
        namespace_for(identity)
    }

    /// Reads the answers saved under `namespace`; empty if absent or malformed.
    pub fn load(&self, namespace: &Namespace) -> AnswerSet {
        read_or_default(self.store.as_ref(), &self.keys.answers(namespace))
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerValue> {
        self.answers.get(question)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Records one answer and persists the whole set under the current
    /// namespace. Memory is left unchanged if the write fails.
    pub fn set(&mut self, question: QuestionId, value: AnswerValue) -> Result<(), StoreError> {
        let mut next = self.answers.clone();
        next.set(question, value);
        write_json(self.store.as_ref(), &self.keys.answers(&self.namespace), &next)?;
        self.answers = next;
        Ok(())
    }

    /// Replaces the in-memory answers with those stored under `namespace`.
    ///
    /// Always reloads, even for the current namespace; answers are never
    /// merged across namespaces.
    pub fn switch_namespace(&mut self, namespace: Namespace) {
        self.answers = self.load(&namespace);
        tracing::debug!(
            namespace = %namespace,
            answers = self.answers.len(),
            "Loaded answers for namespace"
        );
        self.namespace = namespace;
    }

    /// Drops loaded answers the catalog cannot accept. Returns the dropped ids.
    pub fn retain_valid(&mut self, catalog: &QuestionCatalog) -> Vec<QuestionId> {
        let dropped = self.answers.retain_valid(catalog);
        for question in &dropped {
            tracing::warn!(
                namespace = %self.namespace,
                question = %question,
                "Discarding stored answer that does not match the catalog"
            );
        }
        dropped
    }
}
