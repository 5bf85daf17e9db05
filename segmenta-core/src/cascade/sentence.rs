//! Punctuation-driven sentence splitting
//!
//! This is a surface heuristic, not a grammatical parser: abbreviations
//! such as "Dr. Smith" and decimals are split like any other boundary.

use super::{GreedyPacker, SplitStrategy};

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ' ')
}

/// Split text into sentences
///
/// A sentence ends at `.`, `!`, `?` or a space when that character is the
/// last one in the text, or when it is followed by a space and then an
/// upper-case letter. The separating space is consumed.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        current.push(c);

        if is_terminator(c) {
            let at_end = i + 1 >= chars.len();
            let before_capital =
                i + 2 < chars.len() && chars[i + 1] == ' ' && chars[i + 2].is_uppercase();

            if at_end || before_capital {
                push_sentence(&mut sentences, &mut current);
            }
            if before_capital {
                i += 1;
            }
        }

        i += 1;
    }

    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

/// Repacks oversized text sentence by sentence, space-joined
#[derive(Debug, Clone)]
pub struct SentencePacker {
    max_chunk_size: usize,
}

impl SentencePacker {
    /// Create a packer bounded by `max_chunk_size` characters
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }
}

impl SplitStrategy for SentencePacker {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn split(&self, text: &str) -> Vec<String> {
        let mut packer = GreedyPacker::new(self.max_chunk_size, " ", 1);
        for sentence in split_sentences(text) {
            packer.push(&sentence);
        }
        packer.finish()
    }
}
