//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("History path cannot be empty")]
    EmptyHistoryPath,

    #[error("Quiz data file does not exist: {0}")]
    QuizFileMissing(String),

    #[error("Invalid log filter directive")]
    InvalidLogLevel,
}

/// Errors that can occur while loading quiz data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read quiz data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse quiz data: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid quiz data: {0}")]
    Invalid(#[from] DomainError),
}
