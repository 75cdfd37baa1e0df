//! Support code for the `md2html` binary: error reporting, logging setup and the
//! `inspect` views. Conversion itself lives in md2html-babel.

pub mod error;
pub mod inspect;
pub mod logging;

pub use error::CliError;
