//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SDGX` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sdgx::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog read from {}", config.catalog.path.display());
//! ```

mod catalog;
mod error;
mod ideas;
mod logging;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use ideas::IdeasConfig;
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::application::SessionOptions;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Key-value store backend, file path and key prefix
    #[serde(default)]
    pub storage: StorageConfig,

    /// Question catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Idea board scope and date stamp format
    #[serde(default)]
    pub ideas: IdeasConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SDGX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SDGX__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `SDGX__IDEAS__SCOPE=per_profile` -> `ideas.scope = per_profile`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("SDGX").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.catalog.validate()?;
        self.ideas.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Session options derived from the storage and idea sections
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            keys: self.storage.keys(),
            idea_scope: self.ideas.scope,
            date_pattern: self.ideas.date_format.clone(),
        }
    }
}
