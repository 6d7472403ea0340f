//! Idea board configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::{IdeaScope, DEFAULT_DATE_PATTERN};
use crate::domain::foundation::is_valid_date_pattern;

#[derive(Debug, Clone, Deserialize)]
pub struct IdeasConfig {
    /// Shared board or one board per profile
    #[serde(default)]
    pub scope: IdeaScope,

    /// chrono pattern for the idea date stamp
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl IdeasConfig {
    /// Validate idea configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_date_pattern(&self.date_format) {
            return Err(ValidationError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

impl Default for IdeasConfig {
    fn default() -> Self {
        Self {
            scope: IdeaScope::default(),
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_PATTERN.to_string()
}
