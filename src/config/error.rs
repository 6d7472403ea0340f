//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Storage key prefix must be non-empty and must not contain ':'")]
    InvalidKeyPrefix,

    #[error("Invalid idea date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
