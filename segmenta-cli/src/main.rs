//! segmenta command-line entry point

use anyhow::Result;
use clap::Parser;
use segmenta_cli::commands::Commands;

/// Split extracted document text into titled, size-bounded chunks
#[derive(Debug, Parser)]
#[command(name = "segmenta")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
