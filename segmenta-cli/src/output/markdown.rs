//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_core::Chunk;
use std::io::Write;

/// Markdown formatter - one `#` heading per document, one `##` per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_document: Option<String>,
    chunk_count: usize,
    total_chars: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_document: None,
            chunk_count: 0,
            total_chars: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        if self.current_document.as_deref() != Some(chunk.document_id.as_str()) {
            writeln!(self.writer, "# {}", chunk.document_id)?;
            writeln!(self.writer)?;
            self.current_document = Some(chunk.document_id.clone());
        }

        writeln!(self.writer, "## {}", chunk.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer)?;

        self.chunk_count += 1;
        self.total_chars += chunk.char_count;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        writeln!(self.writer, "*Total characters: {}*", self.total_chars)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_chunks;

    #[test]
    fn test_headings_and_totals() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        for chunk in sample_chunks() {
            formatter.format_chunk(&chunk).unwrap();
        }
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("# notes\n\n## INTRODUCTION\n"));
        assert_eq!(output.matches("# notes").count(), 1);
        assert!(output.contains("## METHODS"));
        assert!(output.contains("*Total chunks: 2*"));
        assert!(output.contains("*Total characters: 67*"));
    }
}
