use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::error::DomainError;
use crate::domain::marks::is_word_char;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub sentences: SentenceConfig,
    pub marking: MarkingConfig,
    #[serde(default)]
    pub corrections: CorrectionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceConfig {
    pub terminators: Vec<char>,
    #[serde(default = "default_joiner")]
    pub joiner: String,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '؟'],
            joiner: default_joiner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingConfig {
    pub definite_article: String,
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub transitive_verbs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectionConfig {
    #[serde(flatten)]
    pub categories: HashMap<String, HashMap<String, String>>,
}

fn default_joiner() -> String {
    ". ".to_string()
}

impl LexiconConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: String| Err(DomainError::InvalidLexicon(msg));

        if self.metadata.code.trim().is_empty() {
            return invalid("metadata.code must not be empty".into());
        }

        if self.sentences.terminators.is_empty() {
            return invalid("No terminator characters defined".into());
        }

        if let Some(ch) = self.sentences.terminators.iter().find(|ch| ch.is_whitespace()) {
            return invalid(format!("Terminator {ch:?} is whitespace"));
        }

        if self.sentences.joiner.is_empty() {
            return invalid("sentences.joiner must not be empty".into());
        }

        if self.marking.definite_article.is_empty() {
            return invalid("marking.definite_article must not be empty".into());
        }

        if let Some(word) = self
            .marking
            .prepositions
            .iter()
            .chain(&self.marking.transitive_verbs)
            .find(|word| word.is_empty() || word.chars().any(char::is_whitespace))
        {
            return invalid(format!("Marking word {word:?} must be a single non-empty word"));
        }

        for (category, mappings) in &self.corrections.categories {
            for (wrong, right) in mappings {
                if wrong.is_empty() || right.is_empty() {
                    return invalid(format!("Empty correction entry in '{category}'"));
                }
                // Lookups use the token core, so any other character makes the entry unreachable
                if !wrong.chars().all(is_word_char) {
                    return invalid(format!(
                        "Misspelling '{wrong}' in '{category}' contains non-word characters"
                    ));
                }
            }
        }

        Ok(())
    }

    /// Total number of correction entries across all categories
    pub fn correction_count(&self) -> usize {
        self.corrections.categories.values().map(HashMap::len).sum()
    }
}
