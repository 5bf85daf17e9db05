//! Text normalization and character-count helpers
//!
//! Every size in the cascade is a count of Unicode scalar values, never
//! bytes, so slicing goes through the helpers here.

/// Normalize raw extracted text
///
/// Strips NUL and other non-whitespace control characters, collapses
/// whitespace runs inside each line to a single space while keeping line
/// breaks, and trims the result.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| !c.is_control() || c.is_whitespace())
        .collect();

    let lines: Vec<String> = cleaned
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    lines.join("\n").trim().to_string()
}

/// Length of `text` in characters
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` characters of `text`
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t\n  "), "");
    }

    #[test]
    fn test_collapses_intra_line_whitespace() {
        assert_eq!(normalize("Hello    world\t\tagain"), "Hello world again");
    }

    #[test]
    fn test_preserves_line_boundaries() {
        let text = "  first   line  \n\n second\tline ";
        assert_eq!(normalize(text), "first line\n\nsecond line");
    }

    #[test]
    fn test_strips_nul_and_control_characters() {
        assert_eq!(normalize("abc\0def\u{7}ghi"), "abcdefghi");
    }

    #[test]
    fn test_carriage_returns_become_line_whitespace() {
        assert_eq!(normalize("one\r\ntwo\r\n"), "one\ntwo");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(" A  b \n\n  C\u{0}  d ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_take_chars_on_multibyte() {
        assert_eq!(take_chars("日本語テキスト", 3), "日本語");
        assert_eq!(take_chars("short", 10), "short");
        assert_eq!(take_chars("abc", 0), "");
    }
}
