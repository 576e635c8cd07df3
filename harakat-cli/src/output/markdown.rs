//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use harakat_core::{DiffSegment, Output};
use std::io::Write;

/// Markdown formatter - outputs a report section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    correction_total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            correction_total: 0,
        }
    }

    fn write_diff(&mut self, output: &Output) -> Result<()> {
        let rendered: Vec<String> = output
            .diff()
            .into_iter()
            .map(|segment| match segment {
                DiffSegment::Same { word } => word,
                DiffSegment::Changed { removed, added } => {
                    let removed = removed.map(|w| format!("~~{w}~~"));
                    let added = added.map(|w| format!("**{w}**"));
                    removed.into_iter().chain(added).collect::<Vec<_>>().join(" ")
                }
            })
            .collect();
        writeln!(self.writer, "{}", rendered.join(" "))?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.document_count += 1;
        self.correction_total += output.corrections.len();

        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "### Marked")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.marked)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "### Corrected")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.corrected)?;
        writeln!(self.writer)?;

        if output.has_corrections() {
            writeln!(self.writer, "### Diff")?;
            writeln!(self.writer)?;
            self.write_diff(output)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "### Corrections")?;
            writeln!(self.writer)?;
            for (index, correction) in output.corrections.iter().enumerate() {
                writeln!(
                    self.writer,
                    "{}. {} → {} (word {})",
                    index + 1,
                    correction.original,
                    correction.corrected,
                    correction.position
                )?;
            }
            writeln!(self.writer)?;
        }

        let stats = &output.stats;
        writeln!(
            self.writer,
            "*Words: {} · Sentences: {} · Corrections: {} · Words marked: {}*",
            stats.words_count, stats.sentences_count, stats.corrections_count, stats.words_marked
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {} · Total corrections: {}*",
            self.document_count, self.correction_total
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
