//! Line classification
//!
//! Rules are checked in priority order and the first match wins. Prefix checks are literal:
//! `* ` for unordered items and `1. ` (the digit one, always) for ordered items.
//!
//! Payload stripping is character-class based, not prefix removal. `* item *` yields `item`
//! and `1. 1.5 cups` yields `5 cups`. Existing documents depend on this output.

use serde::Serialize;

const HEADING_STRIP: &[char] = &['#', ' '];
const UNORDERED_STRIP: &[char] = &['*', ' '];
const ORDERED_STRIP: &[char] = &['1', '.', ' '];

/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// The structural role of one input line, borrowing its payload from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum LineKind<'a> {
    /// Stripped heading text
    Heading(&'a str),
    /// Stripped item text, before inline formatting
    UnorderedItem(&'a str),
    /// Stripped item text, before inline formatting
    OrderedItem(&'a str),
    Blank,
    /// The raw, unstripped line
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Heading(_) => "heading",
            LineKind::UnorderedItem(_) => "unordered-item",
            LineKind::OrderedItem(_) => "ordered-item",
            LineKind::Blank => "blank",
            LineKind::Text(_) => "text",
        }
    }

    pub fn payload(&self) -> Option<&'a str> {
        match *self {
            LineKind::Heading(text)
            | LineKind::UnorderedItem(text)
            | LineKind::OrderedItem(text)
            | LineKind::Text(text) => Some(text),
            LineKind::Blank => None,
        }
    }
}

/// Classify a single line (without its `\n`).
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        LineKind::Heading(line.trim_matches(HEADING_STRIP).trim_matches(is_space))
    } else if line.starts_with("* ") {
        LineKind::UnorderedItem(line.trim_matches(UNORDERED_STRIP).trim_matches(is_space))
    } else if line.starts_with("1. ") {
        LineKind::OrderedItem(line.trim_matches(ORDERED_STRIP).trim_matches(is_space))
    } else if line.trim_matches(is_space).is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(line)
    }
}
