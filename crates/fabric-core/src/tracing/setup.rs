//! Subscriber installation for binaries and tests that embed the engine.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Parses per-module directives such as `fabric_analysis=debug,fabric_core=warn`.
///
/// Missing or unparsable directives fall back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a fmt subscriber filtered by `FABRIC_LOG`.
///
/// Only the first call does anything. When the embedding service already
/// installed a global subscriber, that one stays and receives a debug event.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV_VAR).ok();
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(log_filter(directives.as_deref()))
            .try_init();

        if let Err(err) = installed {
            tracing::debug!(error = %err, "global subscriber already set, keeping it");
        }
    });
}
