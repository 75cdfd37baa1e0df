//! Non-greedy delimiter span scanner
//!
//! Every inline rule has the same matching behavior: find the leftmost opening delimiter,
//! take the nearest closing delimiter after it, transform the enclosed text and continue
//! after the closing delimiter. Replaced output is never scanned again by the same rule.
//! A span never crosses a `\n`.

/// A literal opening/closing delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

/// Replaces every delimited span in `text` with `transform(content)`.
///
/// Delimiters without a partner are copied through unchanged.
pub fn replace_spans<F>(text: &str, delimiters: Delimiters, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delimiters.open) {
        let after_open = &rest[start + delimiters.open.len()..];
        let line_end = after_open.find('\n').unwrap_or(after_open.len());

        match after_open[..line_end].find(delimiters.close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(&transform(&after_open[..end]));
                rest = &after_open[end + delimiters.close.len()..];
            }
            None if line_end < after_open.len() => {
                // No partner on this line, so no later opener on it has one either.
                let consumed = start + delimiters.open.len() + line_end + 1;
                out.push_str(&rest[..consumed]);
                rest = &rest[consumed..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
