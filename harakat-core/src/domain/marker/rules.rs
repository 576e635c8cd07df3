//! Positional marking rules
//!
//! Rules are evaluated top to bottom and the first match decides the case of
//! the word. Each rule only sees the word's position in its sentence, its
//! diacritic-free form, and the previous word exactly as written.

use std::fmt;

use serde::Serialize;

use crate::domain::lexicon::Lexicon;
use crate::domain::marks::Diacritic;

/// Grammatical case expressed by the appended mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// Marfu', marked with damma
    Nominative,
    /// Majrur, marked with kasra
    Genitive,
    /// Mansub, marked with fatha
    Accusative,
}

impl Case {
    pub const fn mark(self) -> Diacritic {
        match self {
            Case::Nominative => Diacritic::Damma,
            Case::Genitive => Diacritic::Kasra,
            Case::Accusative => Diacritic::Fatha,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Accusative => "accusative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a rule inspects for a single word
#[derive(Debug, Clone, Copy)]
pub struct WordContext<'a> {
    /// Zero-based position within the sentence
    pub position: usize,
    /// The word with its diacritics removed
    pub clean: &'a str,
    /// The preceding word as written, diacritics included
    pub previous: Option<&'a str>,
}

/// Predicate half of a marking rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    /// First word of the sentence
    SentenceStart,
    /// Previous word is exactly a preposition
    AfterPreposition,
    /// Previous word contains a transitive verb anywhere inside it
    AfterTransitiveVerb,
    /// Word carries the definite article and follows a preposition
    DefiniteAfterPreposition,
    /// Word carries the definite article
    Definite,
    /// Matches every word
    Always,
}

impl RuleCondition {
    pub fn matches(self, word: &WordContext<'_>, lexicon: &Lexicon) -> bool {
        let after_preposition = || word.previous.is_some_and(|prev| lexicon.is_preposition(prev));
        let definite = || word.clean.starts_with(lexicon.definite_article());

        match self {
            RuleCondition::SentenceStart => word.position == 0,
            RuleCondition::AfterPreposition => after_preposition(),
            RuleCondition::AfterTransitiveVerb => word
                .previous
                .is_some_and(|prev| lexicon.contains_transitive_verb(prev)),
            RuleCondition::DefiniteAfterPreposition => definite() && after_preposition(),
            RuleCondition::Definite => definite(),
            RuleCondition::Always => true,
        }
    }
}

/// A condition paired with the case it assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkingRule {
    pub name: &'static str,
    pub condition: RuleCondition,
    pub case: Case,
}

impl MarkingRule {
    pub const fn new(name: &'static str, condition: RuleCondition, case: Case) -> Self {
        Self {
            name,
            condition,
            case,
        }
    }
}

/// Applied when no rule in a set matches
pub const FALLBACK_RULE: MarkingRule =
    MarkingRule::new("default", RuleCondition::Always, Case::Accusative);

/// Ordered rule policy; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<MarkingRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<MarkingRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[MarkingRule] {
        &self.rules
    }

    /// The first rule matching `word`, or [`FALLBACK_RULE`]
    pub fn select(&self, word: &WordContext<'_>, lexicon: &Lexicon) -> &MarkingRule {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(word, lexicon))
            .unwrap_or(&FALLBACK_RULE)
    }
}

impl Default for RuleSet {
    /// The standard cascade.
    ///
    /// `DefiniteAfterPreposition` can never fire after `AfterPreposition`;
    /// it is kept so the definite-article rule reads as a whole.
    fn default() -> Self {
        Self::new(vec![
            MarkingRule::new("sentence_start", RuleCondition::SentenceStart, Case::Nominative),
            MarkingRule::new(
                "after_preposition",
                RuleCondition::AfterPreposition,
                Case::Genitive,
            ),
            MarkingRule::new(
                "after_transitive_verb",
                RuleCondition::AfterTransitiveVerb,
                Case::Accusative,
            ),
            MarkingRule::new(
                "definite_after_preposition",
                RuleCondition::DefiniteAfterPreposition,
                Case::Genitive,
            ),
            MarkingRule::new("definite", RuleCondition::Definite, Case::Nominative),
            FALLBACK_RULE,
        ])
    }
}
