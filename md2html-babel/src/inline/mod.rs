//! Inline formatter
//!
//! Rewrites the text of a single line with four substitutions, always in this order:
//!
//! | Rule     | Delimiters  | Replacement                                  |
//! |----------|-------------|----------------------------------------------|
//! | Bold     | `**...**`   | `<b>...</b>`                                 |
//! | Emphasis | `__...__`   | `<em>...</em>`                               |
//! | Hash     | `[[...]]`   | lowercase hex MD5 of the content             |
//! | StripC   | `((...))`   | the content with every `c` and `C` removed   |
//!
//! Each rule works on the output of the previous one, so `__**x**__` becomes
//! `<em><b>x</b></em>` while `[[**x**]]` hashes the already-rewritten `<b>x</b>`.

pub mod digest;
pub mod scan;

pub use digest::{md5_hex, HashEncoding};
pub use scan::{replace_spans, Delimiters};

use crate::options::ConvertOptions;

/// One step of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    Bold,
    Emphasis,
    Hash,
    StripC,
}

impl InlineRule {
    /// The rules in application order.
    pub const PIPELINE: [InlineRule; 4] = [
        InlineRule::Bold,
        InlineRule::Emphasis,
        InlineRule::Hash,
        InlineRule::StripC,
    ];

    pub fn delimiters(self) -> Delimiters {
        match self {
            InlineRule::Bold => Delimiters::new("**", "**"),
            InlineRule::Emphasis => Delimiters::new("__", "__"),
            InlineRule::Hash => Delimiters::new("[[", "]]"),
            InlineRule::StripC => Delimiters::new("((", "))"),
        }
    }

    /// Apply this single rule to `text`.
    pub fn apply(self, text: &str, options: &ConvertOptions) -> String {
        let delimiters = self.delimiters();
        match self {
            InlineRule::Bold => replace_spans(text, delimiters, |inner| format!("<b>{inner}</b>")),
            InlineRule::Emphasis => {
                replace_spans(text, delimiters, |inner| format!("<em>{inner}</em>"))
            }
            InlineRule::Hash => replace_spans(text, delimiters, |inner| {
                md5_hex(inner, options.hash_encoding)
            }),
            InlineRule::StripC => replace_spans(text, delimiters, |inner| {
                inner.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
            }),
        }
    }
}

/// Runs the whole inline pipeline over one line of text.
pub fn format_inline(text: &str, options: &ConvertOptions) -> String {
    InlineRule::PIPELINE
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        format_inline(text, &ConvertOptions::default())
    }

    #[test]
    fn bold_and_emphasis() {
        assert_eq!(
            fmt("Hello **world** and __there__"),
            "Hello <b>world</b> and <em>there</em>"
        );
    }

    #[test]
    fn hash_replaces_content() {
        assert_eq!(fmt("[[abc]]"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(fmt("id: [[abc]]!"), "id: 900150983cd24fb0d6963f7d28e17f72!");
    }

    #[test]
    fn strip_removes_both_cases() {
        assert_eq!(fmt("((cC rock))"), " rok");
        assert_eq!(fmt("((Chicago))"), "hiago");
    }

    #[test]
    fn text_without_delimiters_is_unchanged() {
        assert_eq!(fmt("plain * text _ here [ ( )"), "plain * text _ here [ ( )");
    }

    #[test]
    fn earlier_rules_feed_later_ones() {
        assert_eq!(fmt("__**x**__"), "<em><b>x</b></em>");
        assert_eq!(fmt("[[**x**]]"), md5_hex("<b>x</b>", HashEncoding::Latin1));
    }

    #[test]
    fn strip_runs_after_hash() {
        // The hash is computed on the raw content, then ((..)) strips from what is left.
        let digest = md5_hex("x", HashEncoding::Latin1);
        let expected: String = digest.chars().filter(|ch| *ch != 'c').collect();
        assert_eq!(fmt("(([[x]]))"), expected);
    }

    #[test]
    fn strip_leaves_bold_tags_alone() {
        assert_eq!(fmt("((**cat**))"), "<b>at</b>");
    }

    #[test]
    fn pipeline_order_is_fixed() {
        let order: Vec<_> = InlineRule::PIPELINE.iter().map(|r| r.delimiters().open).collect();
        assert_eq!(order, vec!["**", "__", "[[", "(("]);
    }

    #[test]
    fn utf8_hash_encoding_option() {
        let options = ConvertOptions::new(HashEncoding::Utf8);
        assert_eq!(
            format_inline("[[é]]", &options),
            md5_hex("é", HashEncoding::Utf8)
        );
    }
}
