//! Declension Fixer Error Types
//!
//! Centralized error handling for the rewrite pipeline.

use thiserror::Error;

/// Central error type for Declension Fixer
#[derive(Error, Debug)]
pub enum FixerError {
    #[error("Completion service error: {0}")]
    Service(String),

    #[error("Unable to fix the sentence.")]
    EmptyCompletion,

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Declension Fixer operations
pub type FixerResult<T> = Result<T, FixerError>;

impl From<reqwest::Error> for FixerError {
    fn from(err: reqwest::Error) -> Self {
        FixerError::Service(err.to_string())
    }
}
