//! Inspect views
//!
//! Each view shows one stage of the conversion for a document:
//!
//! - `lines`:          one line per input line, `N: kind "payload"` (default)
//! - `lines-json`:     the same classification as JSON
//! - `fragments`:      the output buffer, fragment kind next to its rendered HTML
//! - `fragments-json`: the output buffer as JSON
//!
//! Example: `md2html inspect notes.md fragments`

use crate::error::CliError;
use md2html_babel::{classify, transduce, ConvertOptions};

/// All available inspect views
pub const AVAILABLE_VIEWS: &[&str] = &["lines", "lines-json", "fragments", "fragments-json"];

pub const DEFAULT_VIEW: &str = "lines";

/// Render `source` through the named view. The result always ends with a newline.
pub fn execute_view(
    source: &str,
    view: &str,
    options: &ConvertOptions,
) -> Result<String, CliError> {
    match view {
        "lines" => Ok(lines_view(source)),
        "lines-json" => {
            let kinds: Vec<_> = source.split('\n').map(classify).collect();
            Ok(serde_json::to_string_pretty(&kinds)? + "\n")
        }
        "fragments" => Ok(fragments_view(source, options)),
        "fragments-json" => {
            let fragments = transduce(source, options);
            Ok(serde_json::to_string_pretty(&fragments)? + "\n")
        }
        other => Err(CliError::UnknownView(other.to_string())),
    }
}

fn lines_view(source: &str) -> String {
    let mut out = String::new();
    for (index, line) in source.split('\n').enumerate() {
        let number = index + 1;
        let kind = classify(line);
        let entry = match kind.payload() {
            Some(payload) => format!("{number:>4}: {} {payload:?}\n", kind.name()),
            None => format!("{number:>4}: {}\n", kind.name()),
        };
        out.push_str(&entry);
    }
    out
}

fn fragments_view(source: &str, options: &ConvertOptions) -> String {
    transduce(source, options)
        .iter()
        .map(|fragment| format!("{:<16}{fragment}\n", fragment.kind()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, view: &str) -> String {
        execute_view(source, view, &ConvertOptions::default()).expect("view to succeed")
    }

    #[test]
    fn lines_view_numbers_every_line() {
        assert_eq!(
            run("# Title\n* item\n", "lines"),
            "   1: heading \"Title\"\n   2: unordered-item \"item\"\n   3: blank\n"
        );
    }

    #[test]
    fn fragments_view_shows_rendered_html() {
        assert_eq!(
            run("* **a**", "fragments"),
            "open-list       <ul>\nlist-item       <li><b>a</b></li>\nclose-list      </ul>\n"
        );
    }

    #[test]
    fn json_views_are_tagged() {
        let json = run("1. x", "fragments-json");
        assert!(json.contains("\"kind\": \"open-list\""));
        assert!(json.contains("\"ordered\": true"));

        let json = run("1. x", "lines-json");
        assert!(json.contains("\"kind\": \"ordered-item\""));
        assert!(json.contains("\"payload\": \"x\""));
    }

    #[test]
    fn every_listed_view_executes() {
        for view in AVAILABLE_VIEWS {
            assert!(execute_view("text", view, &ConvertOptions::default()).is_ok());
        }
    }

    #[test]
    fn unknown_view_is_an_error() {
        let result = execute_view("text", "tokens", &ConvertOptions::default());
        assert!(matches!(result, Err(CliError::UnknownView(name)) if name == "tokens"));
    }
}
