//! Block transducer
//!
//! Splits the document on `\n` and walks the lines once. For every line the current
//! [`BlockMode`] decides which container must be closed and which opened before the line's
//! own fragment is pushed:
//!
//! | Line             | Closes                    | Opens   | Pushes                 | Next mode     |
//! |------------------|---------------------------|---------|------------------------|---------------|
//! | `#...`           | any open container        | -       | `<h1>..</h1>` (literal)| None          |
//! | `* ...`          | ordered list / paragraph  | `<ul>`  | `<li>..</li>`          | UnorderedList |
//! | `1. ...`         | unordered list / paragraph| `<ol>`  | `<li>..</li>`          | OrderedList   |
//! | blank            | any open container        | -       | -                      | None          |
//! | anything else    | any open list             | `<p>`   | formatted raw line     | Paragraph     |
//!
//! Containers are only opened when the mode actually changes. Whatever is still open after
//! the last line is closed. A trailing `\n` yields a final empty line, which is blank.

mod classify;
mod mode;

pub use classify::{classify, LineKind};
pub use mode::BlockMode;

use crate::fragment::Fragment;
use crate::inline::format_inline;
use crate::options::ConvertOptions;
use tracing::{debug, trace};

/// Produces the output buffer for a whole document.
pub fn transduce(source: &str, options: &ConvertOptions) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mode = source
        .split('\n')
        .enumerate()
        .fold(BlockMode::None, |mode, (index, line)| {
            step(mode, index, line, options, &mut fragments)
        });
    close(mode, &mut fragments);
    debug!(fragments = fragments.len(), "transduced document");
    fragments
}

/// Handles one line and returns the mode for the next one.
fn step(
    mode: BlockMode,
    index: usize,
    line: &str,
    options: &ConvertOptions,
    out: &mut Vec<Fragment>,
) -> BlockMode {
    let kind = classify(line);
    trace!(line = index + 1, kind = kind.name(), ?mode, "classified line");

    match kind {
        LineKind::Heading(text) => {
            close(mode, out);
            out.push(Fragment::Heading(text.to_string()));
            BlockMode::None
        }
        LineKind::UnorderedItem(item) => {
            let next = enter(mode, BlockMode::UnorderedList, out);
            out.push(Fragment::ListItem(format_inline(item, options)));
            next
        }
        LineKind::OrderedItem(item) => {
            let next = enter(mode, BlockMode::OrderedList, out);
            out.push(Fragment::ListItem(format_inline(item, options)));
            next
        }
        LineKind::Blank => {
            close(mode, out);
            BlockMode::None
        }
        LineKind::Text(raw) => {
            let next = enter(mode, BlockMode::Paragraph, out);
            out.push(Fragment::Text(format_inline(raw, options)));
            next
        }
    }
}

/// Switches to `target`, closing the current container first. No-op when already there.
fn enter(mode: BlockMode, target: BlockMode, out: &mut Vec<Fragment>) -> BlockMode {
    if mode != target {
        close(mode, out);
        out.extend(target.opening_fragment());
        debug!(from = ?mode, to = ?target, "block mode transition");
    }
    target
}

fn close(mode: BlockMode, out: &mut Vec<Fragment>) {
    out.extend(mode.closing_fragment());
}
