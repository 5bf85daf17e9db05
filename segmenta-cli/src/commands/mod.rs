//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use segmenta_core::TextChunker;

use crate::output::OutputFormat;

pub mod chunk;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into titled, size-bounded chunks
    Chunk(chunk::ChunkArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List splitting strategies in priority order
    Strategies,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Strategies => {
                println!("Splitting strategies (in priority order):");
                println!("  {:<10} {}", "section", strategy_description("section"));
                for name in TextChunker::new().stage_names() {
                    println!("  {:<10} {}", name, strategy_description(name));
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        println!("  {:<10} {}", value.get_name(), help);
                    }
                }
            }
        }
        Ok(())
    }
}

fn strategy_description(name: &str) -> &'static str {
    match name {
        "section" => "Split at heading-like lines",
        "paragraph" => "Pack blank-line separated paragraphs under the size cap",
        "sentence" => "Pack sentences ending in . ! or ? before a capital letter",
        "fixed" => "Cut at whitespace near the size cap, or exactly at it",
        _ => "",
    }
}
