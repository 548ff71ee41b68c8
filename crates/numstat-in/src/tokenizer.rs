//! Splitting raw text into tokens.
//!
//! - Numeric inputs: one token per non-empty line, surrounding whitespace
//!   removed, source line numbers kept for diagnostics. `\n`, `\r\n` and a
//!   lone `\r` each end a line.
//! - Word inputs: whitespace-separated words, lowercased

use numstat_core::RawToken;

/// One token per non-empty line, with its 1-based line number
pub fn tokenize_lines(text: &str) -> Vec<RawToken> {
    split_lines(text)
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(RawToken {
                    line: idx + 1,
                    text: trimmed.to_string(),
                })
            }
        })
        .collect()
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|segment| segment.strip_suffix('\r').unwrap_or(segment).split('\r'))
}

/// Every whitespace-separated word, lowercased, in input order
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
