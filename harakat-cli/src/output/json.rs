//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use harakat_core::Output;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one record per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentRecord>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentRecord {
    /// Where the text came from
    pub source: String,
    #[serde(flatten)]
    pub output: Output,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            pretty: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentRecord {
            source: source.to_string(),
            output: output.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
