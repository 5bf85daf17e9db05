//! Chunker configuration

use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Upper bound on a chunk's character count
    pub const MAX_CHUNK_SIZE: usize = 2000;

    /// Intended chunk granularity in characters
    pub const MIN_CHUNK_SIZE: usize = 300;

    /// Pieces shorter than this many characters are discarded as noise
    pub const NOISE_FLOOR: usize = 50;

    /// Maximum length of a chunk or section title
    pub const TITLE_MAX_CHARS: usize = 60;

    /// A heading only closes a section whose body is longer than this
    pub const SECTION_MIN_BODY: usize = 100;

    /// How far the hard splitter looks back for whitespace
    pub const HARD_SPLIT_LOOKBACK: usize = 200;
}

/// Size bounds for the chunking cascade
///
/// Both sizes are measured in characters. `min_chunk_size` describes the
/// intended granularity and feeds [`ChunkStats`](crate::ChunkStats); the
/// hard drop threshold is always [`defaults::NOISE_FLOOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Upper bound on a chunk's character count
    pub max_chunk_size: usize,
    /// Target lower bound on a chunk's character count
    pub min_chunk_size: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: defaults::MAX_CHUNK_SIZE,
            min_chunk_size: defaults::MIN_CHUNK_SIZE,
        }
    }
}

impl ChunkerConfig {
    /// Create a configuration builder
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    ///
    /// Keys may sit at the top level or inside a `[chunking]` table, so the
    /// same file can be shared with the CLI configuration. Omitted keys are
    /// filled in the same way as [`ChunkerConfigBuilder::build`] does.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let builder: ChunkerConfigBuilder = match table.get("chunking") {
            Some(section) => section.clone().try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        builder.build()
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ChunkerError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ChunkerError::Configuration(
                "max_chunk_size must be greater than 0".into(),
            ));
        }

        if self.min_chunk_size == 0 {
            return Err(ChunkerError::Configuration(
                "min_chunk_size must be greater than 0".into(),
            ));
        }

        if self.min_chunk_size > self.max_chunk_size {
            return Err(ChunkerError::Configuration(format!(
                "min_chunk_size ({}) must not exceed max_chunk_size ({})",
                self.min_chunk_size, self.max_chunk_size
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default, Deserialize)]
pub struct ChunkerConfigBuilder {
    max_chunk_size: Option<usize>,
    min_chunk_size: Option<usize>,
}

impl ChunkerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk size in characters
    pub fn max_chunk_size(mut self, chars: usize) -> Self {
        self.max_chunk_size = Some(chars);
        self
    }

    /// Set the target minimum chunk size in characters
    pub fn min_chunk_size(mut self, chars: usize) -> Self {
        self.min_chunk_size = Some(chars);
        self
    }

    /// Build the configuration
    ///
    /// When only `max_chunk_size` is lowered below the default target, the
    /// target follows it down instead of failing validation.
    pub fn build(self) -> Result<ChunkerConfig> {
        let mut config = ChunkerConfig::default();

        if let Some(max) = self.max_chunk_size {
            config.max_chunk_size = max;
            if self.min_chunk_size.is_none() {
                config.min_chunk_size = config.min_chunk_size.min(max);
            }
        }

        if let Some(min) = self.min_chunk_size {
            config.min_chunk_size = min;
        }

        config.validate()?;
        Ok(config)
    }
}
