//! hanjaso command-line entry point

use clap::Parser;
use hanjaso_cli::commands::Commands;

/// Convert Hangul text between jaso sequences and syllable blocks
#[derive(Debug, Parser)]
#[command(name = "hanjaso", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
