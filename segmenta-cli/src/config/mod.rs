//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use clap::ValueEnum;
use segmenta_core::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Chunk size bounds
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include per-document chunk statistics in JSON output
    pub include_stats: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            include_stats: false,
        }
    }
}

impl OutputConfig {
    /// Parse the configured default format
    pub fn format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text, json or markdown)",
                self.default_format
            ))
        })
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse and validate a TOML configuration
    ///
    /// Chunk sizes may sit in a `[chunking]` table or at the top level.
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        let mut config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.chunking = ChunkerConfig::from_toml_str(content)?;
        config.output.format()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
