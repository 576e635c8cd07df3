//! Text processor: correction followed by marking

use std::time::Instant;

use crate::api::{Config, Error, Input, Output, ProcessingMetadata, ProcessingStats};
use crate::domain::text::word_count;
use crate::domain::{IrabMarker, SpellingCorrector};

/// Runs the spelling corrector, then the i'rab marker, and collects statistics.
///
/// Both engines share one immutable lexicon. A processor holds no per-call
/// state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    corrector: SpellingCorrector,
    marker: IrabMarker,
    config: Config,
}

impl TextProcessor {
    /// Create a processor with the embedded Arabic lexicon
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let lexicon = config.resolve_lexicon()?;

        Ok(Self {
            corrector: SpellingCorrector::new(lexicon.clone()),
            marker: IrabMarker::with_rules(lexicon, config.rules.clone()),
            config,
        })
    }

    /// Create a processor for an embedded lexicon
    pub fn with_lexicon_code(code: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(Config::builder().lexicon(code).build()?)
    }

    /// Read the input and process it
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text()?;
        Ok(self.process_text(&text))
    }

    /// Process text that is already in memory. Never fails.
    pub fn process_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let lexicon = self.corrector.lexicon();

        let correction = self.corrector.correct(text);
        let marked = self.marker.mark(&correction.text);

        let stats = ProcessingStats {
            corrections_count: correction.corrections.len(),
            words_count: word_count(text),
            sentences_count: lexicon.split_sentences(text).len(),
            words_marked: word_count(&marked),
        };

        let duration = start.elapsed();
        log::debug!(
            "processed {} words ({} corrections) in {:?}",
            stats.words_count,
            stats.corrections_count,
            duration
        );

        Output {
            original: text.to_string(),
            corrected: correction.text,
            marked,
            corrections: correction.corrections,
            stats,
            metadata: ProcessingMetadata {
                duration,
                lexicon: lexicon.code().to_string(),
            },
        }
    }

    pub fn corrector(&self) -> &SpellingCorrector {
        &self.corrector
    }

    pub fn marker(&self) -> &IrabMarker {
        &self.marker
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
