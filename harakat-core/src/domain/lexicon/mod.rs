//! Lexicon data for correction and marking
//!
//! A lexicon bundles the misspelling table, the word lists consulted by the
//! marking rules, and the sentence terminators. Lexicons are described in
//! TOML; the Arabic lexicon is embedded in the binary, others can be loaded
//! from disk.

pub mod config;
pub mod tables;

use std::collections::HashSet;
use std::path::Path;

use crate::domain::error::DomainError;
pub use config::{get_lexicon_config, list_available_lexicons, LexiconConfig};
pub use tables::{CorrectionTable, TermTable};

/// Runtime lexicon built from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    corrections: CorrectionTable,
    terminators: TermTable,
    joiner: String,
    definite_article: String,
    prepositions: HashSet<String>,
    transitive_verbs: Vec<String>,
}

impl Lexicon {
    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let corrections = CorrectionTable::from_categories(&config.corrections.categories)?;
        let terminators = TermTable::new(config.sentences.terminators.iter().copied());

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            corrections,
            terminators,
            joiner: config.sentences.joiner.clone(),
            definite_article: config.marking.definite_article.clone(),
            prepositions: config.marking.prepositions.iter().cloned().collect(),
            transitive_verbs: config.marking.transitive_verbs.clone(),
        })
    }

    /// Build one of the embedded lexicons by code or alias
    pub fn embedded(code: &str) -> Result<Self, DomainError> {
        Self::from_config(get_lexicon_config(code)?)
    }

    /// The embedded Arabic lexicon
    pub fn arabic() -> Result<Self, DomainError> {
        Self::embedded("ar")
    }

    /// Load from a TOML file, optionally overriding its code
    pub fn from_file(path: &Path, code_override: Option<&str>) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let mut config: LexiconConfig = toml::from_str(&content).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        if let Some(code) = code_override {
            config.metadata.code = code.to_string();
        }

        log::debug!(
            "loading lexicon '{}' from {}",
            config.metadata.code,
            path.display()
        );
        Self::from_config(&config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn corrections(&self) -> &CorrectionTable {
        &self.corrections
    }

    pub fn terminators(&self) -> &TermTable {
        &self.terminators
    }

    /// Separator placed between marked sentences
    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    pub fn definite_article(&self) -> &str {
        &self.definite_article
    }

    /// Exact match against the preposition list
    #[inline]
    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    /// Substring match against the transitive verb list
    #[inline]
    pub fn contains_transitive_verb(&self, word: &str) -> bool {
        self.transitive_verbs.iter().any(|verb| word.contains(verb.as_str()))
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.terminators.split_sentences(text)
    }
}
