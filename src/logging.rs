//! Diagnostic logging setup.
//!
//! Logs go to stderr so that stdout carries only the report.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Returns the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sdldiff=debug"
    } else {
        "sdldiff=warn"
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
