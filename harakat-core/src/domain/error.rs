use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unsupported lexicon requested
    #[error("Unsupported lexicon: {0}")]
    UnsupportedLexicon(String),

    /// Lexicon parsed but failed validation
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}
