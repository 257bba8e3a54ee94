//! Tracing subscriber setup for the `folio` binary.
//!
//! Filtering follows, in order: `FOLIO_LOG`, `RUST_LOG`, then the level
//! implied by the number of `-v` flags. Output goes to stderr so rendered
//! HTML on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, Result};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Default filter directives for a verbosity level.
///
/// Only the folio crates are raised; dependencies stay at `warn`.
pub fn filter_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,folio={level},folio_render={level}")
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)))
}

/// Installs the global subscriber. Call once, before any work.
pub fn init(verbosity: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}
