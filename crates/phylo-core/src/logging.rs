//! Tracing initialization.
//!
//! Engines only emit `tracing` events; installing a subscriber is left to the
//! embedding binary or test, which can call [`init_tracing`].

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Reads `PHYLO_LOG` for per-module levels, e.g.
/// `PHYLO_LOG=phylo_cluster::pairing=trace,phylo_cluster::matrix=debug`.
/// Falls back to `phylo=info` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber. If another
/// subscriber was already installed globally, the call is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
