//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use segmenta_core::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the chunk sizes and output settings");
        println!("2. Validate your configuration:");
        println!("   segmenta validate -c {}", self.output.display());
        println!("3. Use it for chunking:");
        println!("   segmenta chunk -i notes.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# segmenta configuration

[chunking]
# Upper bound on a chunk's length, in characters
max_chunk_size = {max}

# Intended chunk granularity, in characters. Reported in statistics;
# pieces are only discarded below {floor} characters.
min_chunk_size = {min}

[output]
# Format used when --format is not given: text, json or markdown
default_format = "text"

# Indent JSON output
pretty_json = true

# Wrap JSON output as {{ "chunks": [...], "stats": [...] }},
# with one stats entry per document
include_stats = false

[performance]
# Worker threads for --parallel (0 = number of CPUs)
worker_threads = 0
"#,
            max = defaults::MAX_CHUNK_SIZE,
            min = defaults::MIN_CHUNK_SIZE,
            floor = defaults::NOISE_FLOOR,
        )
    }
}
