//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `ALIGNMENT_SCORER` prefix and nested values use `__` as separator,
//! e.g. `ALIGNMENT_SCORER__STORAGE__HISTORY_PATH=/var/lib/quiz/history.json`.

mod data;
mod error;

pub use data::{ProfileSpec, QuestionSpec, QuizData};
pub use error::{ConfigError, DataError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// History storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Quiz data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log filter directive (tracing env-filter syntax).
    ///
    /// The crate is library-only and never installs a subscriber itself;
    /// this value is carried for the embedding application to feed into
    /// its `tracing-subscriber` setup.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// History storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the history log
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

/// Quiz data configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DataConfig {
    /// Optional YAML file overriding the built-in question bank and
    /// reference profiles
    pub quiz_file: Option<PathBuf>,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./data/quiz_history.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads environment
    /// variables with the `ALIGNMENT_SCORER` prefix. Every value has a
    /// default, so an empty environment yields a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ALIGNMENT_SCORER")
                    .separator("__"),
            )
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
        if self.storage.history_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyHistoryPath);
        }
        if let Some(path) = &self.data.quiz_file {
            if !path.exists() {
                return Err(ValidationError::QuizFileMissing(
                    path.display().to_string(),
                ));
            }
        }
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel);
        }
        Ok(())
    }

    /// Load the quiz definition: the configured YAML file, or the built-in
    /// default bank when none is set.
    pub fn quiz_data(&self) -> Result<QuizData, DataError> {
        match &self.data.quiz_file {
            Some(path) => QuizData::from_yaml_file(path),
            None => Ok(QuizData::default()),
        }
    }
}
