//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`. The filter is read from
//! `PONS_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`, so an
//! interactive session only shows problems that were swallowed on purpose.

use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PONS_LOG";

/// Installs the global stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Runs a side effect whose failure must not affect the caller.
///
/// Errors are logged at `warn` with `what` as context and then dropped.
/// Returns `true` when the side effect succeeded.
pub fn best_effort<E: Display>(what: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("could not {what}: {e}");
            false
        }
    }
}
