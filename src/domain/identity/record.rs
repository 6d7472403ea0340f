//! Identity record of a commune.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fields::{COMMUNE_NAME_FIELD, OFFICIAL_EMAIL_FIELD, REQUIRED_FIELDS};

/// Free-text answers to the identity sheet, keyed by field name.
///
/// Stored as a plain JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity {
    fields: BTreeMap<String, String>,
}

impl Identity {
    /// Creates an empty identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Sets one field. An empty value removes the entry.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, value);
        }
    }

    /// Returns true if the field is missing or whitespace-only.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).map_or(true, |v| v.trim().is_empty())
    }

    /// The commune name as typed, when it is not blank.
    ///
    /// This is the profile key; it is not trimmed so that it matches the
    /// name stored in the registry exactly.
    pub fn commune_name(&self) -> Option<&str> {
        if self.is_blank(COMMUNE_NAME_FIELD) {
            None
        } else {
            self.get(COMMUNE_NAME_FIELD)
        }
    }

    pub fn official_email(&self) -> Option<&str> {
        if self.is_blank(OFFICIAL_EMAIL_FIELD) {
            None
        } else {
            self.get(OFFICIAL_EMAIL_FIELD)
        }
    }

    /// Required fields that are still blank, in sheet order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.is_blank(field))
            .collect()
    }

    /// True when every required field is filled in.
    pub fn is_fully_identified(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|field| !self.is_blank(field))
    }

    /// `(filled, total)` count of required fields.
    pub fn completion(&self) -> (usize, usize) {
        let total = REQUIRED_FIELDS.len();
        (total - self.missing_fields().len(), total)
    }

    /// True when no field holds any value.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over stored fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
