//! Blank-line paragraph splitting

use super::{GreedyPacker, SplitStrategy};
use crate::types::Section;

const PARAGRAPH_BREAK: &str = "\n\n";

fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Whole-document fallback when heading detection finds too few sections
///
/// Packs paragraphs while `buffer + paragraph <= max_chunk_size` and labels
/// the resulting sections "Section 1", "Section 2", ...
pub fn split_paragraphs(text: &str, max_chunk_size: usize) -> Vec<Section> {
    let mut packer = GreedyPacker::new(max_chunk_size, PARAGRAPH_BREAK, 0);
    for paragraph in paragraphs(text) {
        packer.push(paragraph);
    }

    packer
        .finish()
        .into_iter()
        .enumerate()
        .map(|(i, text)| Section {
            title: format!("Section {}", i + 1),
            text,
        })
        .collect()
}

/// Repacks an oversized section paragraph by paragraph
#[derive(Debug, Clone)]
pub struct ParagraphPacker {
    max_chunk_size: usize,
}

impl ParagraphPacker {
    /// Create a packer bounded by `max_chunk_size` characters
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }
}

impl SplitStrategy for ParagraphPacker {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn split(&self, text: &str) -> Vec<String> {
        // Reserve room for the separator that joins the next paragraph.
        let mut packer = GreedyPacker::new(self.max_chunk_size, PARAGRAPH_BREAK, 2);
        for paragraph in paragraphs(text) {
            packer.push(paragraph);
        }
        packer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs_packs_until_full() {
        let para = "p".repeat(40);
        let text = vec![para.as_str(); 5].join("\n\n");

        // 40 + 2 + 40 + 2 = 84 fits under 100, the third paragraph does not
        let sections = split_paragraphs(&text, 100);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Section 1");
        assert_eq!(sections[1].title, "Section 2");
        assert_eq!(sections[2].title, "Section 3");
        assert_eq!(sections[0].text, format!("{para}\n\n{para}"));
        assert_eq!(sections[2].text, para);
    }

    #[test]
    fn test_split_paragraphs_skips_blank_parts() {
        let text = "alpha\n\n\n\n  \n\nbeta";
        let sections = split_paragraphs(text, 100);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text, "alpha\n\nbeta");
    }

    #[test]
    fn test_split_paragraphs_oversized_paragraph_stands_alone() {
        let text = format!("small\n\n{}\n\ntail", "x".repeat(150));
        let sections = split_paragraphs(&text, 100);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].text, "small");
        assert_eq!(sections[1].text.len(), 150);
        assert_eq!(sections[2].text, "tail");
        assert_eq!(sections[2].title, "Section 3");
    }

    #[test]
    fn test_split_paragraphs_empty() {
        assert!(split_paragraphs("", 100).is_empty());
        assert!(split_paragraphs("\n\n\n\n", 100).is_empty());
    }

    #[test]
    fn test_packer_reserves_separator() {
        let a = "a".repeat(49);
        let b = "b".repeat(49);
        let text = format!("{a}\n\n{b}");

        // 49 + 2 + 49 + 2 = 102 > 100, so the paragraphs are not joined
        let packer = ParagraphPacker::new(100);
        assert_eq!(packer.split(&text), vec![a.clone(), b.clone()]);

        let roomy = ParagraphPacker::new(102);
        assert_eq!(roomy.split(&text), vec![format!("{a}\n\n{b}")]);
    }
}
