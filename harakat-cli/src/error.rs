//! Errors raised by the CLI itself
//!
//! Failures from the core library pass through `anyhow` with context; these
//! variants cover what the CLI detects on its own.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// No `-i` pattern matched a regular file
    #[error("No input files match: {0}")]
    NoInputFiles(String),

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// `-` mixed with file patterns
    #[error("'-' (stdin) cannot be combined with other inputs")]
    StdinConflict,

    /// The selected lexicon could not be turned into a processor
    #[error("Cannot use lexicon {source_name}: {message}")]
    LexiconUnavailable { source_name: String, message: String },

    /// `validate` rejected a lexicon file
    #[error("Lexicon {} failed validation", .path.display())]
    InvalidLexicon { path: PathBuf },

    /// Reading one document failed
    #[error("Processing error: {0}")]
    ProcessingError(String),
}
