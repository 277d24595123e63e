/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sum every settled weight tree adds up to.
pub const GLOBAL_TOTAL: u64 = 1000;

/// Percent sliders run from 0 to this value.
pub const PERCENT_SCALE: f64 = 100.0;

/// Rates are reported per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Separator between fields of an applications profile line.
pub const PROFILE_FIELD_SEPARATOR: char = '|';

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "TRAFFICMIX_LOG";
