// Source document chunking
use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::normalize;

lazy_static! {
    /// Whitespace run holding at least one blank line
    static ref BLANK_LINE_RUN: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Split a source document into independently checkable chunks
///
/// Chunks are separated by one or more blank lines. Blank chunks and chunks
/// whose normalized form is shorter than `min_len` characters are dropped.
/// The returned chunks are trimmed but otherwise keep their original
/// formatting, so reports can show them as the author wrote them.
pub fn split_chunks(text: &str, min_len: usize) -> Vec<String> {
    BLANK_LINE_RUN
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .filter(|chunk| normalize(chunk).chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}
