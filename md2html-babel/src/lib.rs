//! Markdown dialect to HTML conversion
//!
//!     This crate converts a small, line-oriented Markdown dialect into HTML fragments. It is
//!     not a CommonMark implementation: every rule is a literal line prefix or a literal inline
//!     delimiter pair, and nothing nests.
//!
//!     This is a pure lib, that is, it powers md2html-cli but is shell agnostic. No code here
//!     reads files, prints, or looks at the environment. Callers hand in the whole document as
//!     a string and get the whole HTML back.
//!
//!     The file structure :
//!     .
//!     ├── block                   # Block transducer (line classification + mode machine)
//!     │   ├── classify.rs         # Line → LineKind
//!     │   ├── mode.rs             # BlockMode, the only state carried across lines
//!     │   └── mod.rs
//!     ├── inline                  # Inline formatter (ordered substitution pipeline)
//!     │   ├── digest.rs           # [[...]] content hashing
//!     │   ├── scan.rs             # Non-greedy delimiter span scanner
//!     │   └── mod.rs
//!     ├── fragment.rs             # Output buffer elements
//!     ├── options.rs              # Conversion knobs
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The block transducer walks the lines once. Each line is classified (heading, unordered
//!     item, ordered item, blank, text) and the current BlockMode decides which container tags
//!     have to be closed or opened before the line's own fragment is pushed. The mode is
//!     threaded through the loop as a value, there are no flags to keep in sync.
//!
//!     The inline formatter runs four substitutions in a fixed order (bold, emphasis, hash,
//!     letter strip). Each one is a left to right scan that takes the nearest closing delimiter
//!     for every opening one and never looks at its own output again. Later rules see the
//!     output of earlier ones, so the order is part of the contract.
//!
//! Output
//!
//!     The output buffer is a list of [`Fragment`]s. Each fragment renders to exactly one line
//!     and the lines are joined with `\n`, without a trailing newline and without any
//!     `<html>`/`<body>` scaffold.
//!
pub mod block;
pub mod fragment;
pub mod inline;
pub mod options;

pub use block::{classify, transduce, BlockMode, LineKind};
pub use fragment::{render, Fragment};
pub use inline::{format_inline, HashEncoding, InlineRule};
pub use options::ConvertOptions;

/// Converts a whole document to HTML.
///
/// Equivalent to rendering the fragments produced by [`transduce`]. The conversion is total:
/// any input, including the empty string, yields some output.
pub fn convert(source: &str, options: &ConvertOptions) -> String {
    render(&transduce(source, options))
}
