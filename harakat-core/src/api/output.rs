//! Output types for the processing API

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{word_diff, Correction, DiffSegment};

/// Result of correcting and marking one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// The input text, untouched
    pub original: String,
    /// Text after spelling correction
    pub corrected: String,
    /// Corrected text with case marks
    pub marked: String,
    /// Substitutions made by the corrector, ordered by position
    pub corrections: Vec<Correction>,
    pub stats: ProcessingStats,
    /// Not part of the serialized record
    #[serde(skip)]
    pub metadata: ProcessingMetadata,
}

/// Counts reported alongside the texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub corrections_count: usize,
    /// Whitespace-delimited words in the original text
    pub words_count: usize,
    /// Non-empty sentences in the original text
    pub sentences_count: usize,
    /// Whitespace-delimited words in the marked text
    pub words_marked: usize,
}

/// Metadata about the processing
#[derive(Debug, Clone, Default)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Code of the lexicon used
    pub lexicon: String,
}

impl Output {
    /// Word-level diff between the original and corrected text
    pub fn diff(&self) -> Vec<DiffSegment> {
        word_diff(&self.original, &self.corrected)
    }

    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}
