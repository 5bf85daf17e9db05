//! Output formatting module

use anyhow::Result;
use segmenta_core::Chunk;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with a header line per chunk
    Text,
    /// JSON array of chunk records
    Json,
    /// Markdown document with one heading per chunk
    Markdown,
}

/// Options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Pretty-print JSON
    pub pretty_json: bool,
    /// Append statistics measured against this target size
    pub stats_target: Option<usize>,
}

/// Build a formatter for `format` that writes to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use segmenta_core::{Chunk, ChunkAssembler};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer that keeps its bytes reachable after being boxed
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn sample_chunks() -> Vec<Chunk> {
        let mut assembler = ChunkAssembler::new("notes");
        assembler.push("INTRODUCTION", "Cells are the basic unit of life.");
        assembler.push("METHODS", "Samples were stained and examined.");
        assembler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_create_formatter_for_each_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, buffer.clone(), FormatOptions::default());
            for chunk in sample_chunks() {
                formatter.format_chunk(&chunk).unwrap();
            }
            formatter.finish().unwrap();

            assert!(buffer.contents().contains("Cells are the basic unit of life."));
        }
    }
}
