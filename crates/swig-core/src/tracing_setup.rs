//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{defaults, ObservabilityConfig};

static INIT: Once = Once::new();

/// Initialize the swig tracing/logging system.
///
/// Reads the `SWIG_LOG` environment variable for per-crate log levels.
/// Format: `SWIG_LOG=swig_games=debug,swig_storage=warn`
///
/// Falls back to `info` if `SWIG_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    init_with_default(defaults::DEFAULT_LOG_LEVEL);
}

/// Same as [`init_tracing`], but the fallback filter comes from config.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    init_with_default(&config.log_level);
}

fn init_with_default(fallback: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("SWIG_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
