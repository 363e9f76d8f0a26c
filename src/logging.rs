//! Structured logging for the `chatpulse` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Filters come from `CHATPULSE_LOG`, then `RUST_LOG`, and
//! default to `warn`. Output goes to stderr so stdout stays reserved for the
//! run summary.

use std::env;
use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "CHATPULSE_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "chatpulse=debug";

/// Errors that can arise while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid logging filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber.
///
/// `verbose` overrides any environment filter with debug output for this
/// crate.
pub fn init_logging(verbose: bool) -> Result<(), LoggingError> {
    let filter = build_filter(verbose)?;
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}

/// Resolves the filter directive from `verbose` and the environment.
pub fn filter_directive(verbose: bool) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|spec| !spec.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn build_filter(verbose: bool) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(filter_directive(verbose))
}
