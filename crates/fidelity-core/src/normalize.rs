//! Canonical comparison form for markdown text
//!
//! Formatting that differs between a source document and its notebook
//! rendering (emphasis, headings, list and quote markers, inline code,
//! images, line wrapping, case) is erased so that plain substring search can
//! compare the two.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `![alt](path)`. Alt text may hold one level of `[...]` and may wrap
    /// across lines; the path holds no whitespace or parentheses, so an
    /// unclosed reference never swallows the text after it.
    static ref IMAGE_REF: Regex =
        Regex::new(r"!\[(?:[^\[\]]|\[[^\[\]]*\])*\]\([^()\s]*\)").unwrap();

    /// `*`, `#`, `-`, `>` and backtick
    static ref MARKDOWN_MARKERS: Regex = Regex::new(r"[*#\->`]").unwrap();
}

/// Normalize text for comparison
///
/// 1. image references are removed (alt text included)
/// 2. markdown markers become a single space each
/// 3. letters are lowercased
/// 4. whitespace runs collapse to one space, ends trimmed
///
/// `normalize(&normalize(s)) == normalize(s)` holds for every input.
pub fn normalize(text: &str) -> String {
    let without_images = strip_images(text);
    let unmarked = MARKDOWN_MARKERS.replace_all(&without_images, " ");
    let lowered = unmarked.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removing one reference can expose another (`!![a](b)[c](d)`), so strip
/// until none is left.
fn strip_images(text: &str) -> String {
    let mut current = text.to_string();
    while IMAGE_REF.is_match(&current) {
        current = IMAGE_REF.replace_all(&current, "").into_owned();
    }
    current
}
