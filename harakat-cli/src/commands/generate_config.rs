//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Lexicon code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub lexicon_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon configuration template...");
        println!("  Lexicon code: {}", self.lexicon_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to add corrections and word lists");
        println!("2. Validate your configuration:");
        println!(
            "   harakat validate --lexicon-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   harakat process -i input.txt --lexicon-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon configuration for {}

[metadata]
code = "{}"
name = "Custom Lexicon"

[sentences]
# Characters that end a sentence
terminators = [".", "!", "؟"]
# Written between sentences in the marked output
joiner = ". "

[marking]
# Prefix that makes a word definite
definite_article = "ال"
# Previous words that put the next word in the genitive (exact match)
prepositions = ["في", "من", "إلى", "على", "عن"]
# Previous words containing one of these put the next word in the accusative
transitive_verbs = ["درس", "كتب", "قرأ"]

# Corrections organized by category
# Category names are arbitrary - choose what makes sense for your lexicon
# A misspelling may appear in only one category

[corrections.hamza]
"الى" = "إلى"
"اكثر" = "أكثر"

[corrections.taa_marbuta]
"المدرسه" = "المدرسة"

# Add more categories as needed:
# [corrections.demonstratives]
# "هاذا" = "هذا"
"#,
            self.lexicon_code, self.lexicon_code
        )
    }
}
