//! Heading detection and section splitting

use crate::cascade::split_paragraphs;
use crate::config::defaults::{SECTION_MIN_BODY, TITLE_MAX_CHARS};
use crate::normalize::{char_len, take_chars};
use crate::types::Section;
use log::debug;

/// Title of the section that precedes the first detected heading
pub const DEFAULT_SECTION_TITLE: &str = "Introduction";

const HEADING_MIN_CHARS: usize = 3;
const HEADING_MAX_CHARS: usize = 100;
const HEADING_KEYWORDS: [&str; 3] = ["chapter ", "section ", "unit "];

/// Whether a line looks like a heading
///
/// A heading is 3 to 100 characters long and is either upper-case, starts
/// with a numeric label such as "1." or "2.3", or starts with "Chapter",
/// "Section" or "Unit" followed by a space.
pub fn is_heading(line: &str) -> bool {
    let len = char_len(line);
    if !(HEADING_MIN_CHARS..=HEADING_MAX_CHARS).contains(&len) {
        return false;
    }

    if is_upper_case(line) {
        return true;
    }

    if len > HEADING_MIN_CHARS && has_numeric_label(line) {
        return true;
    }

    let lower = line.to_lowercase();
    HEADING_KEYWORDS.iter().any(|k| lower.starts_with(k))
}

/// At least one cased letter and no lower-case ones
fn is_upper_case(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}

/// First space-delimited token is ASCII digits and periods with at least one digit
fn has_numeric_label(line: &str) -> bool {
    let token = line.split(' ').next().unwrap_or_default();
    let mut digits = token.chars().filter(|&c| c != '.').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Partition normalized text into heading-delimited sections
///
/// A heading closes the current section only once that section's body has
/// grown past 100 characters; shorter bodies absorb the heading line. A
/// heading met while the body is still empty becomes the section title.
///
/// If at most one section results and the text is longer than
/// `max_chunk_size`, heading detection is treated as failed and the whole
/// text is split by paragraphs instead.
pub fn split_sections(text: &str, max_chunk_size: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(DEFAULT_SECTION_TITLE);

    for line in text.split('\n') {
        let candidate = line.trim();
        if is_heading(candidate) {
            let title = take_chars(candidate, TITLE_MAX_CHARS);
            let body_len = char_len(current.text.trim());

            if body_len > SECTION_MIN_BODY {
                sections.push(std::mem::replace(&mut current, Section::new(title)));
            } else if body_len == 0 {
                current.title = title.to_string();
            }
        }

        current.text.push_str(line);
        current.text.push('\n');
    }

    if !current.is_blank() {
        sections.push(current);
    }

    if sections.len() <= 1 && char_len(text) > max_chunk_size {
        debug!(
            "heading detection found {} section(s) in {} chars, splitting by paragraphs",
            sections.len(),
            char_len(text)
        );
        return split_paragraphs(text, max_chunk_size);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(len: usize) -> String {
        "lorem ipsum ".repeat(len / 12 + 1)[..len].trim_end().to_string() + "x"
    }

    #[test]
    fn test_upper_case_headings() {
        assert!(is_heading("INTRODUCTION"));
        assert!(is_heading("ABC"));
        assert!(is_heading("1. OVERVIEW"));
        assert!(is_heading("RESULTS: PHASE II"));
        assert!(!is_heading("AB"));
        assert!(!is_heading("123"));
        assert!(!is_heading("Mostly Title Case"));
    }

    #[test]
    fn test_numbered_headings() {
        assert!(is_heading("1. Background"));
        assert!(is_heading("2.3 Methods"));
        assert!(is_heading("12 Results"));
        assert!(is_heading("2024"));
        assert!(!is_heading("1.2"));
        assert!(!is_heading("... and so on"));
        assert!(!is_heading("v1.2 notes"));
    }

    #[test]
    fn test_non_digit_numerals_are_not_labels() {
        assert!(!is_heading("½ cup of sugar"));
        assert!(!is_heading("Ⅳ. Results"));
        assert!(!is_heading("²3 squared"));

        let text = format!("{}\nⅣ. Results of the trial\n{}", body(180), body(180));
        let sections = split_sections(&text, 2000);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, DEFAULT_SECTION_TITLE);
    }

    #[test]
    fn test_keyword_headings() {
        assert!(is_heading("Chapter 4: Cells"));
        assert!(is_heading("section two"));
        assert!(is_heading("Unit 7 review"));
        assert!(!is_heading("Chapters ahead"));
        assert!(!is_heading("United we stand"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_heading(""));
        assert!(is_heading(&"A".repeat(100)));
        assert!(!is_heading(&"A".repeat(101)));
    }

    #[test]
    fn test_two_headings_two_sections() {
        let text = format!("INTRODUCTION\n{}\nCONCLUSION\n{}", body(150), body(150));
        let sections = split_sections(&text, 2000);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "INTRODUCTION");
        assert_eq!(sections[1].title, "CONCLUSION");
        assert!(sections[1].text.starts_with("CONCLUSION\n"));
    }

    #[test]
    fn test_heading_after_short_body_is_absorbed() {
        let text = format!("Preface text.\nMETHODS\n{}", body(150));
        let sections = split_sections(&text, 2000);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, DEFAULT_SECTION_TITLE);
        assert!(sections[0].text.contains("METHODS"));
    }

    #[test]
    fn test_heading_closes_only_bodies_over_100_chars() {
        let absorbed = format!("{}\nMETHODS\n{}", "b".repeat(100), body(150));
        let sections = split_sections(&absorbed, 2000);
        assert_eq!(sections.len(), 1);

        let closed = format!("{}\nMETHODS\n{}", "b".repeat(101), body(150));
        let sections = split_sections(&closed, 2000);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, "METHODS");
    }

    #[test]
    fn test_leading_body_keeps_default_title() {
        let text = format!("{}\nSUMMARY\n{}", body(120), body(120));
        let sections = split_sections(&text, 2000);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[1].title, "SUMMARY");
    }

    #[test]
    fn test_long_heading_title_truncated() {
        let heading = format!("CHAPTER {}", "X".repeat(80));
        let text = format!("{}\n{heading}\n{}", body(120), body(120));
        let sections = split_sections(&text, 2000);

        assert_eq!(sections[1].title.chars().count(), 60);
        assert!(sections[1].text.starts_with(&heading));
    }

    #[test]
    fn test_falls_back_to_paragraphs() {
        let para = "plain paragraph text without any heading cues ".repeat(10);
        let text = vec![para.trim(); 6].join("\n\n");
        let sections = split_sections(&text, 1000);

        assert!(sections.len() > 1);
        assert_eq!(sections[0].title, "Section 1");
        assert!(sections.iter().all(|s| s.title.starts_with("Section ")));
    }

    #[test]
    fn test_single_short_section_is_kept() {
        let sections = split_sections("just a little text", 2000);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Introduction");
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sections("", 2000).is_empty());
    }
}
