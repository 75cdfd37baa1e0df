//! Whole-document conversion tests

use insta::assert_snapshot;
use md2html_babel::{convert, transduce, ConvertOptions, Fragment};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("convert")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

fn to_html(source: &str) -> String {
    convert(source, &ConvertOptions::default())
}

#[test]
fn kitchensink() {
    let html = to_html(&fixture("kitchensink.md"));
    assert_snapshot!(html, @r#"
    <h1>Release notes</h1>
    <p>
    Version <b>2.4</b> ships with <em>better</em> defaults.
      Indented lines keep their spaces.
    </p>
    <ul>
    <li>Faster **startup</li>
    <li>Build id 0d6d4ea27ce38df173b212905adda522</li>
    <li>ahe leanup</li>
    </ul>
    <ol>
    <li>Install</li>
    <li>5 minutes to configure</li>
    <li>Run <em>it</em></li>
    </ol>
    <p>
    Closing remarks with <b>one</b> ** unmatched pair.
    </p>
    <h1>Tight heading</h1>
    "#);
}

#[test]
fn kitchensink_fragment_stream_is_balanced() {
    let fragments = transduce(&fixture("kitchensink.md"), &ConvertOptions::default());
    let mut depth = 0i32;
    for fragment in &fragments {
        match fragment {
            Fragment::OpenList { .. } | Fragment::OpenParagraph => depth += 1,
            Fragment::CloseList { .. } | Fragment::CloseParagraph => depth -= 1,
            Fragment::Heading(_) => assert_eq!(depth, 0, "heading inside a container"),
            Fragment::ListItem(_) | Fragment::Text(_) => assert_eq!(depth, 1),
        }
        assert!((0..=1).contains(&depth));
    }
    assert_eq!(depth, 0);
}

#[test]
fn mixed_transitions_follow_line_order() {
    assert_eq!(
        to_html("* a\n\n1. b"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
    );
}

#[test]
fn windows_line_endings_stay_in_content() {
    // Only `\n` splits lines; `\r` survives in paragraph text and counts as blank alone.
    assert_eq!(to_html("text\r\n\r\n* a\r\n"), "<p>\ntext\r\n</p>\n<ul>\n<li>a</li>\n</ul>");
}

#[test]
fn heading_between_paragraphs() {
    assert_snapshot!(to_html("one\n# Two\nthree"), @r"
    <p>
    one
    </p>
    <h1>Two</h1>
    <p>
    three
    </p>
    ");
}
