//! Core data types shared across the cascade

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bounded-size unit of document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Process-unique identifier
    pub id: Uuid,
    /// Caller-supplied document identifier, never interpreted
    pub document_id: String,
    /// Short label, at most 60 characters
    pub title: String,
    /// Trimmed chunk content
    pub text: String,
    /// Zero-based position within the document
    pub order: usize,
    /// Length of `text` in characters
    pub char_count: usize,
}

/// A heading-delimited span of text before it is checked against the size cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text or a synthesized label
    pub title: String,
    /// Accumulated body, heading line included
    pub text: String,
}

impl Section {
    /// Create a section with an empty body
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
        }
    }

    /// Whether the body holds anything besides whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A document handed to [`TextChunker::chunk_batch`](crate::TextChunker::chunk_batch)
#[derive(Debug, Clone)]
pub struct Document {
    /// Opaque document identifier
    pub id: String,
    /// Raw or pre-normalized text
    pub text: String,
}

impl Document {
    /// Create a document
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Summary statistics over one document's chunks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Number of chunks
    pub chunk_count: usize,
    /// Sum of all chunk lengths in characters
    pub total_chars: usize,
    /// Average chunk length in characters
    pub avg_chars: f32,
    /// Shortest chunk length (0 when there are no chunks)
    pub min_chars: usize,
    /// Longest chunk length
    pub max_chars: usize,
    /// Chunks shorter than the configured target granularity
    pub below_target: usize,
}

impl ChunkStats {
    /// Compute statistics, counting chunks under `target_min_chars` as below target
    pub fn from_chunks(chunks: &[Chunk], target_min_chars: usize) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let total_chars: usize = chunks.iter().map(|c| c.char_count).sum();

        Self {
            chunk_count: chunks.len(),
            total_chars,
            avg_chars: total_chars as f32 / chunks.len() as f32,
            min_chars: chunks.iter().map(|c| c.char_count).min().unwrap_or(0),
            max_chars: chunks.iter().map(|c| c.char_count).max().unwrap_or(0),
            below_target: chunks
                .iter()
                .filter(|c| c.char_count < target_min_chars)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_with_len(order: usize, len: usize) -> Chunk {
        Chunk {
            id: Uuid::new_v4(),
            document_id: "doc".to_string(),
            title: format!("Section {}", order + 1),
            text: "x".repeat(len),
            order,
            char_count: len,
        }
    }

    #[test]
    fn test_section_blank() {
        let mut section = Section::new("Introduction");
        assert!(section.is_blank());

        section.text.push_str("  \n ");
        assert!(section.is_blank());

        section.text.push_str("body");
        assert!(!section.is_blank());
    }

    #[test]
    fn test_stats_empty() {
        let stats = ChunkStats::from_chunks(&[], 300);
        assert_eq!(stats, ChunkStats::default());
    }

    #[test]
    fn test_stats_values() {
        let chunks = vec![
            chunk_with_len(0, 100),
            chunk_with_len(1, 400),
            chunk_with_len(2, 700),
        ];
        let stats = ChunkStats::from_chunks(&chunks, 300);

        assert_eq!(stats.chunk_count, 3);
        assert_eq!(stats.total_chars, 1200);
        assert_eq!(stats.avg_chars, 400.0);
        assert_eq!(stats.min_chars, 100);
        assert_eq!(stats.max_chars, 700);
        assert_eq!(stats.below_target, 1);
    }

    #[test]
    fn test_chunk_json_shape() {
        let chunk = chunk_with_len(0, 60);
        let json = serde_json::to_value(&chunk).unwrap();

        assert_eq!(json["order"], 0);
        assert_eq!(json["char_count"], 60);
        assert_eq!(json["document_id"], "doc");
        assert!(json["id"].is_string());
    }
}
