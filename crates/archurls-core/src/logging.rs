//! Logging init: structured `tracing` output on stderr so stdout carries only records.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Quiet unless something is wrong.
const DEFAULT_FILTER: &str = "warn";

/// Default filter for `--verbose`.
const VERBOSE_FILTER: &str = "info,archurls_core=debug";

/// Initialize logging to stderr. `RUST_LOG` always wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
