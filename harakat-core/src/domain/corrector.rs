//! Dictionary-based spelling correction
//!
//! Each whitespace-delimited token is reduced to its core (word characters
//! only) and looked up in the lexicon's correction table. A hit replaces the
//! token with the standard spelling followed by the token's punctuation; a
//! miss leaves the token untouched.
//!
//! Tokens are re-joined with single spaces, so any run of whitespace in the
//! input collapses to one space in the output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::Lexicon;
use crate::domain::text::{token_core, tokens, trailing_marks};

/// A single substitution made by the corrector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The token as it appeared in the input
    pub original: String,
    /// The replacement token, punctuation included
    pub corrected: String,
    /// Zero-based index in the whitespace-split token sequence
    pub position: usize,
}

/// Corrected text together with the substitutions that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionResult {
    pub text: String,
    pub corrections: Vec<Correction>,
}

/// Stateless spelling corrector over a shared lexicon
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    lexicon: Arc<Lexicon>,
}

impl SpellingCorrector {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Correct every token of `text`. Never fails.
    pub fn correct(&self, text: &str) -> CorrectionResult {
        let mut corrections = Vec::new();
        let mut words = Vec::new();

        for (position, token) in tokens(text).enumerate() {
            match self.correct_token(token) {
                Some(corrected) => {
                    words.push(corrected.clone());
                    corrections.push(Correction {
                        original: token.to_string(),
                        corrected,
                        position,
                    });
                }
                None => words.push(token.to_string()),
            }
        }

        CorrectionResult {
            text: words.join(" "),
            corrections,
        }
    }

    /// Correct a single token, returning the replacement on a hit
    pub fn correct_token(&self, token: &str) -> Option<String> {
        let standard = self.lexicon.corrections().lookup(&token_core(token))?;
        let mut corrected = standard.to_string();
        corrected.extend(trailing_marks(token));
        Some(corrected)
    }
}
