//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Question failed validation
    #[error("Invalid question: {0}")]
    Question(#[from] linesieve_domain::QuestionError),

    /// Inference backend could not be set up
    #[error("{0}")]
    Inference(#[from] linesieve_llm::InferenceError),

    /// The filter run failed
    #[error("{0}")]
    Filter(#[from] linesieve_classifier::FilterError),
}
