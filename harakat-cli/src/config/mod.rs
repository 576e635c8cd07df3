//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default lexicon code
    pub default_lexicon: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_lexicon: harakat_core::api::defaults::LEXICON.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.default_lexicon, "ar");
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[output]
default_format = "json"
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.processing.default_lexicon, "ar");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = 3").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
