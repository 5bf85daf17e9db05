//! Last-resort fixed-length splitting

use super::SplitStrategy;
use crate::config::defaults::HARD_SPLIT_LOOKBACK;

/// Cut text into pieces of at most `max_chunk_size` characters
///
/// Each cut prefers the nearest whitespace at or before the cap, looking
/// back at most 200 characters; without one the cut lands exactly on the
/// cap. Pieces are trimmed and never empty.
pub fn split_fixed(text: &str, max_chunk_size: usize) -> Vec<String> {
    let max = max_chunk_size.max(1);
    let chars: Vec<char> = text.trim().chars().collect();
    let mut pieces = Vec::new();

    let mut start = 0;
    while chars.len() - start > max {
        let window = &chars[start..];
        let lowest = max.saturating_sub(HARD_SPLIT_LOOKBACK) + 1;
        let cut = (lowest..=max)
            .rev()
            .find(|&pos| window[pos].is_whitespace())
            .unwrap_or(max);

        let piece: String = window[..cut].iter().collect();
        let piece = piece.trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }

        start += cut;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }

    if start < chars.len() {
        pieces.push(chars[start..].iter().collect());
    }

    pieces
}

/// Cascade stage wrapping [`split_fixed`]
#[derive(Debug, Clone)]
pub struct FixedSplitter {
    max_chunk_size: usize,
}

impl FixedSplitter {
    /// Create a splitter bounded by `max_chunk_size` characters
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }
}

impl SplitStrategy for FixedSplitter {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn split(&self, text: &str) -> Vec<String> {
        split_fixed(text, self.max_chunk_size)
    }
}
