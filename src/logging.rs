//! Diagnostic logging setup.
//!
//! User-facing output goes through [`crate::output`]; tracing events are for
//! diagnosing a run and are written to stderr. `--verbose` turns on debug
//! events for this crate; a non-empty `RUST_LOG` overrides either default.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "warn,dirgenie=debug";

/// Builds the filter from `RUST_LOG`-style directives, falling back to the
/// default for the given verbosity when they are absent or invalid.
fn build_filter(env_directives: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Installs the global tracing subscriber.
pub fn init_logging(verbose: bool, color: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(color)
                .with_filter(build_filter(
                    std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
                    verbose,
                )),
        )
        .try_init()
}
