//! Error types for the API

use thiserror::Error;

use crate::domain::DomainError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid lexicon specification
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Lexicon loading error from the domain layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
