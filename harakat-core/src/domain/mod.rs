//! Domain layer: the correction and marking engines and the data they run on.
//!
//! Everything here is pure: engines hold an `Arc<Lexicon>` and never mutate
//! it, so a single instance can serve any number of threads.

pub mod corrector;
pub mod diff;
pub mod error;
pub mod lexicon;
pub mod marker;
pub mod marks;
pub mod text;

pub use corrector::{Correction, CorrectionResult, SpellingCorrector};
pub use diff::{word_diff, DiffSegment};
pub use error::DomainError;
pub use lexicon::Lexicon;
pub use marker::{Case, IrabMarker, MarkedSentence, MarkedWord, MarkingRule, RuleCondition, RuleSet};
pub use marks::Diacritic;
