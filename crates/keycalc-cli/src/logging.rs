//! Diagnostic logging via `tracing-subscriber`
//!
//! Diagnostics always go to stderr so stdout carries only calculator
//! output. `RUST_LOG`, when set, overrides the level chosen by `-q`/`-v`.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Builds the filter: `RUST_LOG` if present and valid, else the verbosity level
#[must_use]
pub fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber
///
/// A second call is a no-op.
pub fn init_logging(verbosity: Verbosity, with_ansi: bool) {
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(with_ansi)
        .with_target(false)
        .without_time();

    let installed = tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(layer)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level = verbosity.log_directive(), "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Verbosity::Quiet, false);
        init_logging(Verbosity::Debug, false);
    }
}
