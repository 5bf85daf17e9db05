//! JSON output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use segmenta_core::{Chunk, ChunkStats};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers chunks and writes them as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    chunks: Vec<Chunk>,
}

/// Document written when statistics are requested
#[derive(Debug, Serialize)]
struct ChunksWithStats<'a> {
    chunks: &'a [Chunk],
    stats: Vec<DocumentStats<'a>>,
}

/// Statistics for one input document
#[derive(Debug, Serialize)]
struct DocumentStats<'a> {
    document_id: &'a str,
    #[serde(flatten)]
    stats: ChunkStats,
}

/// One stats entry per document, in output order
fn stats_by_document(chunks: &[Chunk], target: usize) -> Vec<DocumentStats<'_>> {
    chunks
        .chunk_by(|a, b| a.document_id == b.document_id)
        .map(|group| DocumentStats {
            document_id: &group[0].document_id,
            stats: ChunkStats::from_chunks(group, target),
        })
        .collect()
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            chunks: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let chunks = std::mem::take(&mut self.chunks);

        match self.options.stats_target {
            Some(target) => {
                let document = ChunksWithStats {
                    stats: stats_by_document(&chunks, target),
                    chunks: &chunks,
                };
                self.write_value(&document)?;
            }
            None => self.write_value(&chunks)?,
        }

        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
