//! Validate command implementation

use anyhow::Result;
use clap::Args;
use harakat_core::Lexicon;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating lexicon configuration: {}",
            self.lexicon_config.display()
        );

        match Lexicon::from_file(&self.lexicon_config, None) {
            Ok(lexicon) => {
                println!("✓ Configuration is valid!");
                println!("  Lexicon code: {}", lexicon.code());
                println!("  Lexicon name: {}", lexicon.name());
                println!("  Corrections:  {}", lexicon.corrections().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::Error::new(e).context(CliError::InvalidLexicon {
                    path: self.lexicon_config.clone(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            lexicon_config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "ar-test"
name = "Test Lexicon"

[marking]
definite_article = "ال"
prepositions = ["في"]

[corrections.hamza]
"الى" = "إلى"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            lexicon_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"

[marking]
definite_article = "ال"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            lexicon_config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidLexicon { .. })
        ));
        assert!(format!("{err:#}").contains("metadata.code must not be empty"));
    }

    #[test]
    fn test_validate_unreachable_correction() {
        let toml_content = r#"
[metadata]
code = "ar-test"
name = "Test"

[marking]
definite_article = "ال"

[corrections.common]
"الى." = "إلى"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            lexicon_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
