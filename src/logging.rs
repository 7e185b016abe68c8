//! Tracing setup for the demo binaries.
//!
//! Logs go to stderr; stdout is reserved for transcripts.

use std::io;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins, otherwise `default_level` applies.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber.
///
/// Returns `false` if one was already installed, which is harmless for these binaries.
pub fn init(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
