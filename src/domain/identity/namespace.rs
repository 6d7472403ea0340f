//! Storage namespace derived from an identity's commune name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::Identity;

/// Namespace used while no commune name has been entered.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Key isolating one commune's answers from the others.
///
/// Two names that normalize identically share a namespace, so returning to
/// a previously used name restores its answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Normalizes a commune name: lower-cased, whitespace runs become `_`.
    ///
    /// Blank names map to the default namespace.
    pub fn from_name(name: &str) -> Self {
        if name.trim().is_empty() {
            return Self::default();
        }

        let mut key = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    key.push('_');
                }
                in_whitespace = true;
            } else {
                key.extend(c.to_lowercase());
                in_whitespace = false;
            }
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_NAMESPACE
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace for an identity's answers.
pub fn namespace_for(identity: &Identity) -> Namespace {
    identity
        .commune_name()
        .map(Namespace::from_name)
        .unwrap_or_default()
}
