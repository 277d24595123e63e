// Single source of truth for all default values.

use crate::constants;
use crate::models::TimeRange;

// --- Weights ---
pub const DEFAULT_GLOBAL_TOTAL: u64 = constants::GLOBAL_TOTAL;

// --- Rate ---
pub const DEFAULT_IDLE_DECAY_SECS: f64 = 15.0;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_TIME_RANGE: TimeRange = TimeRange::OneHour;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
