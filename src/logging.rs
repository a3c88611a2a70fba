//! Tracing setup for binaries and tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,dungeon=info,renethack=info";

static TRACING_INIT: Once = Once::new();

/// Installs a compact fmt subscriber. Only the first call has an effect.
pub fn init_tracing(default_filter: &str) {
    let default_filter = default_filter.to_string();
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact();

        // A subscriber may already be installed by the embedding program.
        let _ = subscriber.try_init();
    });
}

pub fn init_tracing_default() {
    init_tracing(DEFAULT_FILTER);
}
