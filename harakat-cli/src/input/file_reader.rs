//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }
}

/// A single document to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Name used in output headers and progress messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}
