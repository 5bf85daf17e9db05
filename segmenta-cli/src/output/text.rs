//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_core::Chunk;
use std::io::Write;

/// Plain text formatter - a header line, then the chunk text, then a blank line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        writeln!(
            self.writer,
            "=== [{}#{}] {} ({} chars) ===",
            chunk.document_id, chunk.order, chunk.title, chunk.char_count
        )?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
