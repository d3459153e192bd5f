//! Diagnostic output for the command-line tools.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber.
///
/// Warnings are always shown; `verbose` adds run summaries. `RUST_LOG`
/// takes precedence over both.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
