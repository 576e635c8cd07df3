//! Configuration API for text processing

use std::path::Path;
use std::sync::Arc;

use crate::api::Error;
use crate::domain::lexicon::{get_lexicon_config, Lexicon};
use crate::domain::RuleSet;

/// Default configuration constants
pub mod defaults {
    /// Code of the lexicon used when none is given
    pub const LEXICON: &str = "ar";
}

/// Where the processor's lexicon comes from
#[derive(Debug, Clone)]
pub enum LexiconSource {
    /// One of the lexicons compiled into the crate
    Embedded(String),
    /// A lexicon built by the caller
    Custom(Arc<Lexicon>),
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) lexicon: LexiconSource,
    pub(crate) rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::Embedded(defaults::LEXICON.to_string()),
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn lexicon_source(&self) -> &LexiconSource {
        &self.lexicon
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let LexiconSource::Embedded(code) = &self.lexicon {
            if code.trim().is_empty() {
                return Err(Error::InvalidLexicon(
                    "lexicon code must not be empty".into(),
                ));
            }
            get_lexicon_config(code)?;
        }

        if self.rules.rules().is_empty() {
            log::warn!("empty rule set: every word will receive the fallback mark");
        }

        Ok(())
    }

    /// Build the runtime lexicon this configuration refers to
    pub(crate) fn resolve_lexicon(&self) -> Result<Arc<Lexicon>, Error> {
        match &self.lexicon {
            LexiconSource::Embedded(code) => Ok(Arc::new(Lexicon::embedded(code)?)),
            LexiconSource::Custom(lexicon) => Ok(Arc::clone(lexicon)),
        }
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lexicon: Option<LexiconSource>,
    rules: Option<RuleSet>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an embedded lexicon by code or alias
    pub fn lexicon(mut self, code: impl Into<String>) -> Self {
        self.lexicon = Some(LexiconSource::Embedded(code.into()));
        self
    }

    /// Use a lexicon built by the caller
    pub fn custom_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(LexiconSource::Custom(Arc::new(lexicon)));
        self
    }

    /// Load a lexicon from a TOML file
    pub fn lexicon_file(
        self,
        path: impl AsRef<Path>,
        code_override: Option<&str>,
    ) -> Result<Self, Error> {
        let lexicon = Lexicon::from_file(path.as_ref(), code_override)?;
        Ok(self.custom_lexicon(lexicon))
    }

    /// Replace the marking rule cascade
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let defaults = Config::default();
        let config = Config {
            lexicon: self.lexicon.unwrap_or(defaults.lexicon),
            rules: self.rules.unwrap_or(defaults.rules),
        };

        config.validate()?;
        Ok(config)
    }
}
