//! Snippet extraction around matches.
//!
//! Regex matches report byte offsets. Context widths, snippet caps and the
//! offsets exposed in [`MatchOccurrence`](crate::engine::MatchOccurrence) are
//! all counted in characters, so everything here walks `char_indices`.

use std::ops::Range;

use crate::engine::config::AnalyzerConfig;

/// Converts byte offsets into character offsets with a running position.
///
/// Non-decreasing offsets are resolved by walking only the bytes since the
/// previous call. Seeking backwards restarts the walk at the beginning of the
/// text.
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        CharCursor {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte_index`, which must lie on a char boundary.
    pub fn char_offset(&mut self, byte_index: usize) -> usize {
        if byte_index < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte_index].chars().count();
        self.byte = byte_index;
        self.chars
    }
}

/// Whitespace trimmed from snippet edges: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F.
pub fn is_snippet_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Byte range covering `context_chars` characters on each side of a match,
/// clamped to the text.
pub fn context_window(text: &str, start: usize, end: usize, context_chars: usize) -> Range<usize> {
    let window_start = if context_chars == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(context_chars - 1)
            .map_or(0, |(i, _)| i)
    };

    let window_end = text[end..]
        .char_indices()
        .nth(context_chars)
        .map_or(text.len(), |(i, _)| end + i);

    window_start..window_end
}

/// Cut `text` to at most `max_chars` characters, appending `ellipsis` if
/// anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ellipsis}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Extract the trimmed, length-capped snippet for the match at
/// `start..end` (byte offsets).
pub fn extract_snippet(text: &str, start: usize, end: usize, config: &AnalyzerConfig) -> String {
    let window = context_window(text, start, end, config.context_chars);
    let trimmed = text[window].trim_matches(is_snippet_space);
    truncate_chars(trimmed, config.max_snippet_chars, &config.ellipsis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window_clamps_to_bounds() {
        let text = "short text";
        assert_eq!(context_window(text, 6, 10, 40), 0..10);
    }

    #[test]
    fn test_context_window_in_the_middle() {
        let text = "0123456789abcdefghij";
        // match "ab" at 10..12 with 3 chars of context
        assert_eq!(context_window(text, 10, 12, 3), 7..15);
        assert_eq!(&text[context_window(text, 10, 12, 3)], "789abcde");
    }

    #[test]
    fn test_context_window_zero_context() {
        let text = "pay up now";
        assert_eq!(context_window(text, 0, 6, 0), 0..6);
    }

    #[test]
    fn test_context_counts_characters_not_bytes() {
        let text = "ééééé fraud ééééé";
        let start = text.find("fraud").unwrap();
        let end = start + "fraud".len();

        let window = context_window(text, start, end, 3);
        assert_eq!(&text[window], "éé fraud éé");
        assert_eq!(CharCursor::new(text).char_offset(start), 6);
    }

    #[test]
    fn test_char_cursor_forward_and_backward() {
        let text = "aé€b😀c";
        let mut cursor = CharCursor::new(text);

        let expected: Vec<(usize, usize)> = text
            .char_indices()
            .enumerate()
            .map(|(chars, (byte, _))| (byte, chars))
            .collect();
        for &(byte, chars) in &expected {
            assert_eq!(cursor.char_offset(byte), chars);
        }
        assert_eq!(cursor.char_offset(text.len()), 6);

        // repeated and backward seeks
        assert_eq!(cursor.char_offset(text.len()), 6);
        assert_eq!(cursor.char_offset(3), 2);
        assert_eq!(cursor.char_offset(0), 0);
        assert_eq!(cursor.char_offset(6), 3);
    }

    #[test]
    fn test_extract_snippet_trims_information_separators() {
        let config = AnalyzerConfig::default();
        let text = "\u{1c}\u{1f} scam \u{1d}\u{1e}";
        let start = text.find("scam").unwrap();

        let snippet = extract_snippet(text, start, start + "scam".len(), &config);
        assert_eq!(snippet, "scam");
        assert!(is_snippet_space('\u{a0}'));
        assert!(!is_snippet_space('\u{1b}'));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 6, "…"), "abcdef");
        assert_eq!(truncate_chars("abcdef", 4, "…"), "abcd…");
        assert_eq!(truncate_chars("ééé", 2, "..."), "éé...");
    }

    #[test]
    fn test_extract_snippet_trims_whitespace() {
        let config = AnalyzerConfig::default();
        let text = "Urgent\n   I admit it   ";
        let start = text.find("I admit").unwrap();

        let snippet = extract_snippet(text, start, start + "I admit".len(), &config);
        assert_eq!(snippet, "Urgent\n   I admit it");
    }

    #[test]
    fn test_extract_snippet_truncates_long_matches() {
        let config = AnalyzerConfig::default();
        let text = "x".repeat(500);

        let snippet = extract_snippet(&text, 100, 400, &config);
        assert_eq!(snippet.chars().count(), 201);
        assert!(snippet.ends_with('…'));
    }
}
