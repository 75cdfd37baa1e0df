//! Errors reported by the `md2html` binary.
//!
//! Every variant ends the process with exit status 1 after a single line on stderr.

use md2html_config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Printed when the input/output arguments are missing.
pub const USAGE: &str = "Usage: md2html README.md README.html";

#[derive(Debug, Error)]
pub enum CliError {
    /// Fewer than two positional arguments, or no command at all
    #[error("{}", USAGE)]
    Usage,

    /// Any other argument problem detected by clap
    #[error("{0}")]
    Arguments(#[from] clap::Error),

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Error reading file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown view '{0}'. Use --list-views to see the available views")]
    UnknownView(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
