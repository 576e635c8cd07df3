//! Positional i'rab marking
//!
//! Text is split into sentences on the lexicon's terminators. Within each
//! sentence every word loses its existing diacritics and receives exactly one
//! case mark, chosen by the first matching rule of a [`RuleSet`]. The scan is
//! left to right with one word of lookback.
//!
//! Sentences are re-joined with the lexicon's joiner (`". "` for Arabic)
//! whatever their original terminator was.

pub mod rules;

use std::sync::Arc;

use serde::Serialize;

use crate::domain::lexicon::Lexicon;
use crate::domain::marks::{strip_diacritics, Diacritic};
use crate::domain::text::tokens;
pub use rules::{Case, MarkingRule, RuleCondition, RuleSet, WordContext, FALLBACK_RULE};

/// A word after marking, with the rule that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedWord {
    /// The word as it appeared in the sentence
    pub source: String,
    /// The word without diacritics
    pub clean: String,
    pub mark: Diacritic,
    pub case: Case,
    pub rule: &'static str,
}

impl MarkedWord {
    /// The clean word followed by its mark
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.clean.len() + 2);
        out.push_str(&self.clean);
        out.push(self.mark.as_char());
        out
    }
}

/// All marked words of one sentence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MarkedSentence {
    pub words: Vec<MarkedWord>,
}

impl MarkedSentence {
    pub fn render(&self) -> String {
        self.words
            .iter()
            .map(MarkedWord::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Stateless marker over a shared lexicon and rule policy
#[derive(Debug, Clone)]
pub struct IrabMarker {
    lexicon: Arc<Lexicon>,
    rules: RuleSet,
}

impl IrabMarker {
    /// Marker using the standard rule cascade
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_rules(lexicon, RuleSet::default())
    }

    pub fn with_rules(lexicon: Arc<Lexicon>, rules: RuleSet) -> Self {
        Self { lexicon, rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Mark `text` and render it. Never fails.
    pub fn mark(&self, text: &str) -> String {
        self.analyze(text)
            .iter()
            .map(MarkedSentence::render)
            .collect::<Vec<_>>()
            .join(self.lexicon.joiner())
    }

    /// Mark `text`, keeping the per-word decisions
    pub fn analyze(&self, text: &str) -> Vec<MarkedSentence> {
        self.lexicon
            .split_sentences(text)
            .into_iter()
            .map(|sentence| self.mark_sentence(sentence))
            .collect()
    }

    /// Mark a single sentence without looking for terminators
    pub fn mark_sentence(&self, sentence: &str) -> MarkedSentence {
        let mut previous: Option<&str> = None;
        let mut words = Vec::new();

        for (position, word) in tokens(sentence).enumerate() {
            let clean = strip_diacritics(word);
            let context = WordContext {
                position,
                clean: &clean,
                previous,
            };
            let rule = self.rules.select(&context, &self.lexicon);

            words.push(MarkedWord {
                source: word.to_string(),
                mark: rule.case.mark(),
                case: rule.case,
                rule: rule.name,
                clean,
            });
            previous = Some(word);
        }

        MarkedSentence { words }
    }
}
