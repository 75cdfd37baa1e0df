//! Logger setup for the binary.
//!
//! Logs always go to stderr so they never mix with `inspect` output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter: `--verbose` wins, then `RUST_LOG`, then the configured directive.
pub fn build_filter(verbose: bool, configured: &str) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
}

/// Initialize the global subscriber. Calling it twice is harmless.
pub fn init_logger(verbose: bool, configured: &str) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, configured))
        .with(console_layer)
        .try_init();
}
