//! Arabic spelling correction and positional i'rab marking
//!
//! Text goes through two passes. The spelling corrector replaces common
//! misspellings with their standard orthography, keeping the punctuation
//! attached to each word. The i'rab marker then splits the corrected text
//! into sentences and appends a case mark (damma, kasra or fatha) to every
//! word, chosen from the word's position and the word before it.
//!
//! Both passes are pure functions over an immutable [`Lexicon`] and never
//! fail on any input.
//!
//! # Architecture
//!
//! - **Domain layer**: lexicon tables, the corrector, the marker and its rules
//! - **API layer**: configuration, input handling and the [`TextProcessor`]
//!   that runs both passes and gathers statistics
//!
//! # Example
//!
//! ```rust
//! use harakat_core::{Input, TextProcessor};
//!
//! let processor = TextProcessor::new().unwrap();
//! let output = processor
//!     .process(Input::from_text("الطالب ذهب الى المدرسه"))
//!     .unwrap();
//!
//! assert_eq!(output.corrected, "الطالب ذهب إلى المدرسة");
//! assert_eq!(output.corrections.len(), 2);
//! assert!(output.marked.ends_with("المدرسةِ"));
//! ```

pub mod api;
pub mod domain;

pub use api::{
    Config, ConfigBuilder, Error as ApiError, Input, LexiconSource, Output, ProcessingMetadata,
    ProcessingStats, TextProcessor,
};
pub use domain::{
    Case, Correction, CorrectionResult, Diacritic, DiffSegment, DomainError, IrabMarker,
    Lexicon, MarkedSentence, MarkedWord, MarkingRule, RuleCondition, RuleSet,
    SpellingCorrector,
};
pub use domain::lexicon::list_available_lexicons;
