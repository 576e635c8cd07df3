//! harakat command-line entry point

use clap::Parser;
use harakat_cli::commands::Commands;

/// Arabic spelling correction and i'rab marking
#[derive(Debug, Parser)]
#[command(name = "harakat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
