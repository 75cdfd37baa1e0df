//! Defines the output buffer elements.

use serde::Serialize;
use std::fmt;

/// A single element of the output buffer.
///
/// The transducer only ever appends fragments; nothing is rewritten once pushed. Every
/// fragment renders to exactly one output line (see [`render`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Fragment {
    OpenList { ordered: bool },
    CloseList { ordered: bool },
    OpenParagraph,
    CloseParagraph,
    /// Heading text, already stripped, never inline-formatted
    Heading(String),
    /// List item payload after inline formatting
    ListItem(String),
    /// A paragraph line after inline formatting
    Text(String),
}

impl Fragment {
    /// Short kebab-case name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::OpenList { .. } => "open-list",
            Fragment::CloseList { .. } => "close-list",
            Fragment::OpenParagraph => "open-paragraph",
            Fragment::CloseParagraph => "close-paragraph",
            Fragment::Heading(_) => "heading",
            Fragment::ListItem(_) => "list-item",
            Fragment::Text(_) => "text",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::OpenList { ordered: false } => f.write_str("<ul>"),
            Fragment::OpenList { ordered: true } => f.write_str("<ol>"),
            Fragment::CloseList { ordered: false } => f.write_str("</ul>"),
            Fragment::CloseList { ordered: true } => f.write_str("</ol>"),
            Fragment::OpenParagraph => f.write_str("<p>"),
            Fragment::CloseParagraph => f.write_str("</p>"),
            Fragment::Heading(text) => write!(f, "<h1>{text}</h1>"),
            Fragment::ListItem(text) => write!(f, "<li>{text}</li>"),
            Fragment::Text(text) => f.write_str(text),
        }
    }
}

/// Renders fragments to the final HTML text, one line per fragment.
pub fn render(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
