//! Lexicon source management for CLI

use anyhow::{Context, Result};
use harakat_core::Config;
use std::path::PathBuf;

/// Source of the lexicon used for processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Embedded lexicon, by code or alias
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional lexicon code override
        lexicon_code: Option<String>,
    },
}

impl LexiconSource {
    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn(code) => format!("Built-in: {code}"),
            LexiconSource::External { path, lexicon_code } => {
                if let Some(code) = lexicon_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Build the core processing configuration
    pub fn to_config(&self) -> Result<Config> {
        let builder = Config::builder();
        let builder = match self {
            LexiconSource::BuiltIn(code) => builder.lexicon(code.clone()),
            LexiconSource::External { path, lexicon_code } => builder
                .lexicon_file(path, lexicon_code.as_deref())
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?,
        };

        builder
            .build()
            .with_context(|| format!("Invalid lexicon source: {}", self.display_name()))
    }
}
