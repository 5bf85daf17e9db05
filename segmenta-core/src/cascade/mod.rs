//! Oversize reduction cascade
//!
//! A section that exceeds the size cap is handed to an ordered list of
//! [`SplitStrategy`] stages: paragraph repacking, sentence repacking and
//! finally a hard fixed-length cut. After each stage the dispatcher
//! measures every piece and forwards only the ones still over the cap to
//! the next stage. A stage that produces nothing forwards its whole input.

use crate::normalize::char_len;
use log::{debug, trace};

pub mod fixed;
pub mod paragraph;
pub mod sentence;

pub use fixed::{split_fixed, FixedSplitter};
pub use paragraph::{split_paragraphs, ParagraphPacker};
pub use sentence::{split_sentences, SentencePacker};

/// One stage of the cascade: oversized text in, smaller pieces out
pub trait SplitStrategy: Send + Sync {
    /// Human-readable stage name
    fn name(&self) -> &'static str;

    /// Split `text` into trimmed, non-empty pieces in document order
    ///
    /// Pieces may still exceed the cap; the dispatcher sends those on.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Ordered list of split strategies with a size-checking dispatcher
pub struct Cascade {
    max_chunk_size: usize,
    stages: Vec<Box<dyn SplitStrategy>>,
}

impl std::fmt::Debug for Cascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cascade")
            .field("max_chunk_size", &self.max_chunk_size)
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl Cascade {
    /// Standard cascade: paragraph, sentence, hard cut
    pub fn new(max_chunk_size: usize) -> Self {
        Self::with_stages(
            max_chunk_size,
            vec![
                Box::new(ParagraphPacker::new(max_chunk_size)),
                Box::new(SentencePacker::new(max_chunk_size)),
                Box::new(FixedSplitter::new(max_chunk_size)),
            ],
        )
    }

    /// Cascade with custom stages
    ///
    /// Pieces still oversized after the last stage are hard-cut, so the
    /// size bound holds for any stage list.
    pub fn with_stages(max_chunk_size: usize, stages: Vec<Box<dyn SplitStrategy>>) -> Self {
        Self {
            max_chunk_size,
            stages,
        }
    }

    /// Names of the stages in priority order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Reduce `text` to pieces of at most `max_chunk_size` characters
    pub fn reduce(&self, text: &str) -> Vec<String> {
        self.reduce_from(text, 0)
    }

    fn reduce_from(&self, text: &str, stage: usize) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        if char_len(text) <= self.max_chunk_size {
            return vec![text.to_string()];
        }

        let Some(strategy) = self.stages.get(stage) else {
            return split_fixed(text, self.max_chunk_size);
        };

        let pieces = strategy.split(text);
        if pieces.is_empty() {
            debug!(
                "{} stage produced nothing for {} chars, falling through",
                strategy.name(),
                char_len(text)
            );
            return self.reduce_from(text, stage + 1);
        }

        trace!("{} stage produced {} pieces", strategy.name(), pieces.len());

        pieces
            .into_iter()
            .flat_map(|piece| {
                if char_len(&piece) <= self.max_chunk_size {
                    vec![piece]
                } else {
                    self.reduce_from(&piece, stage + 1)
                }
            })
            .collect()
    }
}

/// Greedy accumulate-and-flush packing shared by the paragraph and sentence stages
///
/// A unit joins the buffer while `buffer + unit + slack <= max`, where the
/// buffer length counts the separators already appended. Otherwise the
/// buffer is flushed and the unit starts a new one, even if it alone is
/// over the cap.
pub(crate) struct GreedyPacker {
    max: usize,
    separator: &'static str,
    slack: usize,
    buffer: String,
    buffer_len: usize,
    pieces: Vec<String>,
}

impl GreedyPacker {
    pub(crate) fn new(max: usize, separator: &'static str, slack: usize) -> Self {
        Self {
            max,
            separator,
            slack,
            buffer: String::new(),
            buffer_len: 0,
            pieces: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, unit: &str) {
        let unit_len = char_len(unit);
        if self.buffer_len + unit_len + self.slack > self.max {
            self.flush();
        }
        self.buffer.push_str(unit);
        self.buffer.push_str(self.separator);
        self.buffer_len += unit_len + char_len(self.separator);
    }

    fn flush(&mut self) {
        let piece = self.buffer.trim();
        if !piece.is_empty() {
            self.pieces.push(piece.to_string());
        }
        self.buffer.clear();
        self.buffer_len = 0;
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        self.flush();
        self.pieces
    }
}
