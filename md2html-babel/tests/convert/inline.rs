//! Inline formatting as seen through full conversion

use md2html_babel::inline::md5_hex;
use md2html_babel::{convert, format_inline, ConvertOptions, HashEncoding};

fn paragraph(body: &str) -> String {
    format!("<p>\n{body}\n</p>")
}

#[test]
fn bold_and_emphasis_in_paragraph() {
    let html = convert("Hello **world** and __there__", &ConvertOptions::default());
    assert_eq!(html, paragraph("Hello <b>world</b> and <em>there</em>"));
}

#[test]
fn hash_is_independent_of_context() {
    let options = ConvertOptions::default();
    let digest = "900150983cd24fb0d6963f7d28e17f72";
    assert_eq!(format_inline("[[abc]]", &options), digest);
    assert_eq!(
        convert("* see [[abc]]", &options),
        format!("<ul>\n<li>see {digest}</li>\n</ul>")
    );
    assert_eq!(convert("1. [[abc]]", &options), format!("<ol>\n<li>{digest}</li>\n</ol>"));
}

#[test]
fn hash_encoding_only_matters_beyond_ascii() {
    let latin1 = ConvertOptions::new(HashEncoding::Latin1);
    let utf8 = ConvertOptions::new(HashEncoding::Utf8);
    assert_eq!(convert("[[abc]]", &latin1), convert("[[abc]]", &utf8));
    assert_ne!(convert("[[café]]", &latin1), convert("[[café]]", &utf8));
    assert_eq!(
        convert("[[café]]", &utf8),
        paragraph(&md5_hex("café", HashEncoding::Utf8))
    );
}

#[test]
fn letter_strip_unwraps_parentheses() {
    assert_eq!(
        format_inline("((cC rock))", &ConvertOptions::default()),
        " rok"
    );
}

#[test]
fn multiple_spans_per_rule() {
    assert_eq!(
        format_inline("**a** **b** __c__ __d__", &ConvertOptions::default()),
        "<b>a</b> <b>b</b> <em>c</em> <em>d</em>"
    );
}
