//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info, warn};
use segmenta_core::{Chunk, ChunkerConfig, Document, TextChunker};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum chunk size in characters
    #[arg(long, value_name = "CHARS")]
    pub max_chunk_size: Option<usize>,

    /// Target minimum chunk size in characters
    #[arg(long, value_name = "CHARS")]
    pub min_chunk_size: Option<usize>,

    /// Document identifier (single input only; default: file name without extension)
    #[arg(long, value_name = "ID")]
    pub document_id: Option<String>,

    /// Include per-document chunk statistics in JSON output
    #[arg(long)]
    pub stats: bool,

    /// Chunk files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel chunking (default: CPU count)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        info!("Starting chunking");
        debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let chunker_config = self.chunker_config(&config)?;
        let chunker = TextChunker::with_config(chunker_config).map_err(CliError::from)?;
        info!(
            "Chunk sizes: max {} chars, target {} chars",
            chunker_config.max_chunk_size, chunker_config.min_chunk_size
        );

        let files = resolve_patterns(&self.input)?;
        if self.document_id.is_some() && files.len() > 1 {
            return Err(CliError::InvalidArgument(format!(
                "--document-id needs a single input file, {} matched",
                files.len()
            ))
            .into());
        }
        info!("Found {} file(s) to chunk", files.len());

        let documents = self.read_documents(&files)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        let results = if self.parallel && documents.len() > 1 {
            let threads = self.thread_count(&config)?;
            info!("Chunking {} documents on {threads} threads", documents.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| chunker.chunk_batch(&documents))
        } else {
            documents
                .iter()
                .map(|doc| chunker.chunk_document(doc))
                .collect()
        };

        let format = match self.format {
            Some(format) => format,
            None => config.output.format()?,
        };
        let options = FormatOptions {
            pretty_json: config.output.pretty_json,
            stats_target: (self.stats || config.output.include_stats)
                .then_some(chunker_config.min_chunk_size),
        };
        let mut formatter = self.create_formatter(format, options)?;

        let mut total_chunks = 0;
        for (document, chunks) in documents.iter().zip(&results) {
            if chunks.is_empty() {
                warn!("{}: no text to chunk", document.id);
            }
            self.write_chunks(formatter.as_mut(), chunks)?;
            progress.document_completed(&document.id, chunks.len());

            let stats = chunker.stats(chunks);
            debug!(
                "{}: {} chunks, {} chars, avg {:.1}, {} below target",
                document.id, stats.chunk_count, stats.total_chars, stats.avg_chars, stats.below_target
            );
            total_chunks += chunks.len();
        }

        formatter.finish()?;
        progress.finish();

        info!(
            "Chunking complete: {} chunks from {} document(s)",
            total_chunks,
            documents.len()
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Ok(CliConfig::from_file(path)?)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Merge command-line sizes over the configuration file
    fn chunker_config(&self, config: &CliConfig) -> Result<ChunkerConfig> {
        let mut merged = config.chunking;

        if let Some(max) = self.max_chunk_size {
            merged.max_chunk_size = max;
            if self.min_chunk_size.is_none() {
                merged.min_chunk_size = merged.min_chunk_size.min(max);
            }
        }
        if let Some(min) = self.min_chunk_size {
            merged.min_chunk_size = min;
        }

        merged.validate().map_err(CliError::from)?;
        Ok(merged)
    }

    fn thread_count(&self, config: &CliConfig) -> Result<usize> {
        match self.threads {
            Some(0) => {
                Err(CliError::InvalidArgument("--threads must be greater than 0".into()).into())
            }
            Some(n) => Ok(n),
            None if config.performance.worker_threads > 0 => Ok(config.performance.worker_threads),
            None => Ok(num_cpus::get()),
        }
    }

    fn read_documents(&self, files: &[PathBuf]) -> Result<Vec<Document>> {
        files
            .iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                debug!("Read {} ({} bytes)", path.display(), text.len());
                Ok(Document::new(self.document_id_for(path), text))
            })
            .collect()
    }

    fn document_id_for(&self, path: &Path) -> String {
        self.document_id
            .clone()
            .unwrap_or_else(|| FileReader::document_id(path))
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        options: FormatOptions,
    ) -> Result<Box<dyn OutputFormatter>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(create_formatter(format, BufWriter::new(file), options))
            }
            None => Ok(create_formatter(format, io::stdout(), options)),
        }
    }

    fn write_chunks(&self, formatter: &mut dyn OutputFormatter, chunks: &[Chunk]) -> Result<()> {
        for chunk in chunks {
            formatter.format_chunk(chunk)?;
        }
        Ok(())
    }
}
