//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the ConfAssist tracing/logging system.
///
/// Reads `CONFASSIST_LOG` for per-module log levels.
/// Format: `CONFASSIST_LOG=confassist_spelling=debug,confassist_llm=warn`
///
/// Falls back to `info` if `CONFASSIST_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("CONFASSIST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter, json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        install(EnvFilter::new(filter), false);
    });
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    if result.is_err() {
        // Another subscriber is already installed (e.g. by a test harness).
        tracing::debug!("global tracing subscriber already set");
    }
}
