//! Chunk assembly
//!
//! Wraps accepted text spans into [`Chunk`] records with sequential order,
//! fresh identifiers and size metadata.

use crate::normalize::char_len;
use crate::types::Chunk;
use uuid::Uuid;

/// Accumulates the chunks of one document in emission order
#[derive(Debug)]
pub struct ChunkAssembler {
    document_id: String,
    chunks: Vec<Chunk>,
}

impl ChunkAssembler {
    /// Create an assembler for one document
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            chunks: Vec::new(),
        }
    }

    /// Order the next pushed chunk will receive
    pub fn next_order(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Append a chunk; `text` is trimmed before it is stored
    pub fn push(&mut self, title: impl Into<String>, text: &str) {
        let text = text.trim().to_string();
        self.chunks.push(Chunk {
            id: Uuid::new_v4(),
            document_id: self.document_id.clone(),
            title: title.into(),
            char_count: char_len(&text),
            text,
            order: self.chunks.len(),
        });
    }

    /// Consume the assembler and return the chunks
    pub fn finish(self) -> Vec<Chunk> {
        self.chunks
    }
}
