//! politely command-line entry point

use anyhow::Result;
use clap::Parser;
use politely_cli::commands::Commands;

/// Restyle pre-tagged Korean sentences to the politeness a listener expects
#[derive(Debug, Parser)]
#[command(name = "politely", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
