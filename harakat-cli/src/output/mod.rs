//! Output formatting module

use anyhow::Result;
use harakat_core::Output;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one processed document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Marked text, one line per document
    Text,
    /// JSON array with the full record per document
    Json,
    /// Markdown report with corrections, diff and statistics
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Marked text, one line per document",
            OutputFormat::Json => "JSON array with original, corrected, marked, corrections and stats",
            OutputFormat::Markdown => "Markdown report with corrections, word diff and statistics",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
