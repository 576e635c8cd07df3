//! Runtime tables built from a lexicon configuration
//!
//! All tables are immutable once built and allocation-free during lookup.

pub mod correction;
pub mod terminator;

pub use correction::CorrectionTable;
pub use terminator::TermTable;
