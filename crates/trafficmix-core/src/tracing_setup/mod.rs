//! Tracing setup: structured logging with span definitions.

pub mod spans;

#[doc(hidden)]
pub use tracing;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::{LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Filter used when `TRAFFICMIX_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "trafficmix=info";

/// Initialize the tracing subscriber.
///
/// Reads the `TRAFFICMIX_LOG` environment variable for per-crate log levels,
/// e.g. `TRAFFICMIX_LOG=trafficmix_weights=debug,trafficmix_rate=trace`.
/// Falls back to `trafficmix=info`.
///
/// Idempotent: only the first initialization in a process takes effect.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

/// Initialize tracing with an explicit filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize tracing from the observability section of the config.
/// `TRAFFICMIX_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("trafficmix={}", config.log_level)));
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        // A host application may already own the global subscriber.
        let installed = if json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
        if installed {
            tracing::debug!(version = VERSION, json, "tracing initialized");
        }
    });
}
