//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use harakat_core::Output;
use std::io::Write;

/// Plain text formatter - outputs the marked text of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.marked)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harakat_core::TextProcessor;

    #[test]
    fn test_one_line_per_document() {
        let processor = TextProcessor::new().unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_document("a", &processor.process_text("بيت"))
                .unwrap();
            formatter
                .format_document("b", &processor.process_text("الى البيت"))
                .unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "بيتُ\nإلىُ البيتِ\n");
    }
}
