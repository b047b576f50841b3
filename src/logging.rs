//! Logging setup
//!
//! Diagnostics go to stderr through `tracing` so report output on stdout
//! stays clean. `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with `default_level` unless `RUST_LOG` is set
///
/// Can only take effect once per process; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Level used when no `RUST_LOG` is set
pub fn default_level(verbose: bool, tui: bool) -> &'static str {
    match (verbose, tui) {
        // Writes to stderr would corrupt the alternate screen
        (_, true) => "off",
        (true, false) => "debug",
        (false, false) => "warn",
    }
}
