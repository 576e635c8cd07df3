//! Processing API
//!
//! Wraps the two engines behind a single call that takes text in and returns
//! the original, corrected and marked text together with the list of
//! corrections and summary statistics.

mod config;
mod error;
mod input;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder, LexiconSource};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::TextProcessor;
