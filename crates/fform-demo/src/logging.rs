#![forbid(unsafe_code)]

//! Tracing subscriber setup for the demo binary.
//!
//! Logs go to stderr so stdout carries only shell output. The filter comes
//! from, in priority order: `--log` / `FFORM_DEMO_LOG`, then `RUST_LOG`,
//! then the default `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init(directives: Option<&str>) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(directives))
        .with(fmt_layer)
        .try_init()
}

/// Build the filter. Unparseable `directives` fall through to `RUST_LOG`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    if let Some(directives) = directives
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(DEFAULT_FILTER)
}
