//! Substring-based field lookup for kanata event payloads.
//!
//! kanata only ever sends two event shapes we care about, so instead of a
//! full JSON parser this module looks for the literal `"<key>":"` (or
//! `"<key>":["`) pattern and takes everything up to the next double quote.
//! Escape sequences are not decoded; a value containing `\"` is cut at the
//! escaped quote.

/// Upper bound on the length of an extracted value, in bytes.
pub const MAX_VALUE_LEN: usize = 127;

/// How the value is quoted after the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `"key":"value"`
    Scalar,
    /// `"key":["value"]` (only the first element is read)
    SingleElementArray,
}

impl Shape {
    fn opener(self) -> &'static str {
        match self {
            Shape::Scalar => "\"",
            Shape::SingleElementArray => "[\"",
        }
    }
}

/// Find the string value of `key` in `text`.
///
/// Returns `None` when the pattern is missing or the value has no closing
/// quote.  Values longer than [`MAX_VALUE_LEN`] are truncated.
pub fn extract<'a>(text: &'a str, key: &str, shape: Shape) -> Option<&'a str> {
    extract_bounded(text, key, shape, MAX_VALUE_LEN)
}

/// Like [`extract`] with an explicit length bound.
pub fn extract_bounded<'a>(
    text: &'a str,
    key: &str,
    shape: Shape,
    max_len: usize,
) -> Option<&'a str> {
    let pattern = format!("\"{}\":{}", key, shape.opener());
    let start = text.find(&pattern)? + pattern.len();
    let rest = &text[start..];
    let end = rest.find('"')?;
    Some(truncate(&rest[..end], max_len))
}

/// Cut `s` to at most `max_len` bytes without splitting a character.
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
