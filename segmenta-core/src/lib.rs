//! Adaptive text segmentation for extracted document text
//!
//! Splits an arbitrary block of text into ordered, size-bounded chunks
//! suitable for summarization, question generation or indexing. Splitting
//! strategies are tried in strict priority order until every chunk fits:
//!
//! 1. **Sections** delimited by heading-like lines
//! 2. **Paragraphs** separated by blank lines, greedily repacked
//! 3. **Sentences** ending in punctuation before a capital letter
//! 4. **Fixed-length** cuts at whitespace near the cap
//!
//! All sizes are character counts. Chunking never fails: empty input gives
//! no chunks and any other input gives at least one.
//!
//! # Example
//!
//! ```rust
//! use segmenta_core::{ChunkerConfig, TextChunker};
//!
//! let config = ChunkerConfig::builder().max_chunk_size(500).build().unwrap();
//! let chunker = TextChunker::with_config(config).unwrap();
//!
//! let text = "INTRODUCTION\nCells are the basic unit of life. They were first \
//!             observed in the seventeenth century under early microscopes.\n\
//!             METHODS\nSamples were stained and examined at several \
//!             magnifications to compare the structures found in each tissue.";
//! let chunks = chunker.chunk(text, "biology-notes");
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].title, "INTRODUCTION");
//! assert_eq!(chunks[1].title, "METHODS");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod cascade;
pub mod chunker;
pub mod config;
pub mod error;
pub mod normalize;
pub mod section;
pub mod title;
pub mod types;

// Re-export key types
pub use assembler::ChunkAssembler;
pub use cascade::{Cascade, SplitStrategy};
pub use chunker::{TextChunker, FALLBACK_TITLE};
pub use config::{defaults, ChunkerConfig, ChunkerConfigBuilder};
pub use error::{ChunkerError, Result};
pub use normalize::normalize;
pub use section::{is_heading, split_sections};
pub use title::synthesize_title;
pub use types::{Chunk, ChunkStats, Document, Section};
