//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Correct spelling and mark word endings in text files
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon configuration file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded lexicons
    Lexicons,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Lexicons => {
                let mut codes = harakat_core::list_available_lexicons();
                codes.sort_unstable();
                println!("Available lexicons:");
                for code in codes {
                    let lexicon = harakat_core::Lexicon::embedded(code)?;
                    println!(
                        "  {:<6} {} ({} corrections)",
                        code,
                        lexicon.name(),
                        lexicon.corrections().len()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<9} {}", format.as_str(), format.description());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let process_cmd = Commands::Process(process::ProcessArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: Some(OutputFormat::Text),
            lexicon: Some("ar".to_string()),
            lexicon_config: None,
            lexicon_code: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", process_cmd);
        assert!(debug_str.contains("Process"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Lexicons,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Lexicons"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Lexicons.execute().is_ok());
        assert!(ListCommands::Formats.execute().is_ok());
    }
}
