//! Top-level chunking entry point

use crate::{
    assembler::ChunkAssembler,
    cascade::Cascade,
    config::{defaults::NOISE_FLOOR, ChunkerConfig},
    error::Result,
    normalize::{char_len, normalize, take_chars},
    section::split_sections,
    title::synthesize_title,
    types::{Chunk, ChunkStats, Document},
};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Title of the single chunk emitted when the cascade keeps nothing
pub const FALLBACK_TITLE: &str = "Main Content";

/// Adaptive text chunker
///
/// Holds only immutable configuration, so one instance can serve any number
/// of documents from any number of threads.
#[derive(Debug)]
pub struct TextChunker {
    config: ChunkerConfig,
    cascade: Cascade,
}

impl TextChunker {
    /// Create a chunker with default configuration
    pub fn new() -> Self {
        let config = ChunkerConfig::default();
        Self {
            cascade: Cascade::new(config.max_chunk_size),
            config,
        }
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cascade: Cascade::new(config.max_chunk_size),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Names of the oversize cascade stages in priority order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.cascade.stage_names()
    }

    /// Split `text` into ordered, size-bounded chunks
    ///
    /// Returns an empty vector only when the normalized text is empty. Any
    /// other input yields at least one chunk, and every chunk holds at most
    /// `max_chunk_size` characters.
    pub fn chunk(&self, text: &str, document_id: &str) -> Vec<Chunk> {
        debug!(
            "chunking document {document_id}: {} input chars",
            char_len(text)
        );

        if text.trim().is_empty() {
            debug!("document {document_id} is empty, no chunks");
            return Vec::new();
        }

        let normalized = normalize(text);
        let max = self.config.max_chunk_size;
        let sections = split_sections(&normalized, max);
        debug!("document {document_id}: {} sections", sections.len());

        let mut assembler = ChunkAssembler::new(document_id);

        for section in sections {
            let body = section.text.trim();
            let body_len = char_len(body);

            if body_len < NOISE_FLOOR {
                continue;
            }

            if body_len <= max {
                assembler.push(section.title, body);
                continue;
            }

            debug!(
                "section '{}' has {body_len} chars, reducing through cascade",
                section.title
            );
            for piece in self.cascade.reduce(body) {
                if char_len(&piece) >= NOISE_FLOOR {
                    let title = synthesize_title(&piece, assembler.next_order());
                    assembler.push(title, &piece);
                }
            }
        }

        if assembler.is_empty() && !normalized.is_empty() {
            debug!("document {document_id}: nothing above the noise floor, emitting one chunk");
            assembler.push(FALLBACK_TITLE, take_chars(&normalized, max));
        }

        let chunks = assembler.finish();
        debug!("created {} chunks for document {document_id}", chunks.len());
        chunks
    }

    /// Chunk a [`Document`]
    pub fn chunk_document(&self, document: &Document) -> Vec<Chunk> {
        self.chunk(&document.text, &document.id)
    }

    /// Chunk many documents, returning results in input order
    ///
    /// With the `parallel` feature the documents are spread across the
    /// current rayon thread pool.
    pub fn chunk_batch(&self, documents: &[Document]) -> Vec<Vec<Chunk>> {
        #[cfg(feature = "parallel")]
        {
            documents
                .par_iter()
                .map(|doc| self.chunk_document(doc))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.chunk_document(doc))
                .collect()
        }
    }

    /// Statistics over `chunks` measured against the configured target size
    pub fn stats(&self, chunks: &[Chunk]) -> ChunkStats {
        ChunkStats::from_chunks(chunks, self.config.min_chunk_size)
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new()
    }
}
