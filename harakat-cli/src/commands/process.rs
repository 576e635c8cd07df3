//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use harakat_core::{Output, TextProcessor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::lexicon_source::LexiconSource;
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Embedded lexicon code or alias
    #[arg(short, long, value_name = "CODE", conflicts_with = "lexicon_config")]
    pub lexicon: Option<String>,

    /// External lexicon configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon_config: Option<PathBuf>,

    /// Override the code of the external lexicon
    #[arg(long, value_name = "CODE", requires = "lexicon_config")]
    pub lexicon_code: Option<String>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let sources = resolve_inputs(&self.input)?;
        log::info!("Resolved {} input(s)", sources.len());

        let lexicon_source = self.lexicon_source(&config);
        log::info!("Using lexicon {}", lexicon_source.display_name());
        let processor = TextProcessor::with_config(lexicon_source.to_config()?).map_err(|e| {
            CliError::LexiconUnavailable {
                source_name: lexicon_source.display_name(),
                message: e.to_string(),
            }
        })?;

        let progress = ProgressReporter::new(sources.len(), self.quiet);

        let results = if self.parallel && sources.len() > 1 {
            self.process_parallel(&processor, &sources, &progress, &config)?
        } else {
            sources
                .iter()
                .map(|source| {
                    let output = process_source(&processor, source)?;
                    progress.document_done(&source.display_name(), &output);
                    Ok((source.display_name(), output))
                })
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        self.write_results(&results, &config)
    }

    fn lexicon_source(&self, config: &CliConfig) -> LexiconSource {
        match &self.lexicon_config {
            Some(path) => LexiconSource::External {
                path: path.clone(),
                lexicon_code: self.lexicon_code.clone(),
            },
            None => LexiconSource::BuiltIn(
                self.lexicon
                    .clone()
                    .unwrap_or_else(|| config.processing.default_lexicon.clone()),
            ),
        }
    }

    fn process_parallel(
        &self,
        processor: &TextProcessor,
        sources: &[InputSource],
        progress: &ProgressReporter,
        config: &CliConfig,
    ) -> Result<Vec<(String, Output)>> {
        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };
        log::info!("Processing {} inputs on {} threads", sources.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;

        // collect keeps the input order
        pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let output = process_source(processor, source)?;
                    progress.document_done(&source.display_name(), &output);
                    Ok((source.display_name(), output))
                })
                .collect()
        })
    }

    fn write_results(&self, results: &[(String, Output)], config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.output.default_format);
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for (source, output) in results {
            formatter.format_document(source, output)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

fn process_source(processor: &TextProcessor, source: &InputSource) -> Result<Output> {
    let text = source
        .read_text()
        .with_context(|| CliError::ProcessingError(source.display_name()))?;
    let output = processor.process_text(&text);
    log::info!(
        "{}: {} corrections, {} sentences in {:?}",
        source.display_name(),
        output.stats.corrections_count,
        output.stats.sentences_count,
        output.metadata.duration
    );
    Ok(output)
}
