//! Title synthesis for chunks without a natural heading

use crate::config::defaults::TITLE_MAX_CHARS;
use crate::normalize::{char_len, take_chars};

const TITLE_MIN_CHARS: usize = 5;
const ELLIPSIS: &str = "...";

/// Derive a title from the first line of `text`
///
/// Leading list markers and numbering are stripped and the line is cut at
/// its first period. Overlong results are shortened with an ellipsis;
/// results under 5 characters are replaced by "Section {order + 1}".
pub fn synthesize_title(text: &str, order: usize) -> String {
    let first_line = text.split('\n').next().unwrap_or_default().trim();
    let cleaned = first_line
        .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '*' | '#' | ' '));

    let title = match cleaned.split_once('.') {
        Some((head, _)) => head.trim(),
        None => cleaned,
    };

    let len = char_len(title);
    if len > TITLE_MAX_CHARS {
        let keep = TITLE_MAX_CHARS - ELLIPSIS.len();
        format!("{}{ELLIPSIS}", take_chars(title, keep))
    } else if len < TITLE_MIN_CHARS {
        format!("Section {}", order + 1)
    } else {
        title.to_string()
    }
}
