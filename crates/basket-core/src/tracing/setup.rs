//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads `BASKET_LOG` for filter directives, e.g.
/// `BASKET_LOG=basket_mining::apriori=debug,basket_mining::rules=info`.
/// Falls back to `basket=info` when unset or unparsable.
///
/// Idempotent. If another subscriber is already installed (a host
/// application, a test harness) the existing one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        match installed {
            Ok(()) => tracing::debug!(version = VERSION, "tracing initialized"),
            // Goes to whichever subscriber won.
            Err(e) => tracing::debug!(
                version = VERSION,
                error = %e,
                "global subscriber already installed, keeping it"
            ),
        }
    });
}
