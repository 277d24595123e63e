use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::TimeRange;

/// Live-rate aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Seconds without new requests after which the rate drops to zero.
    pub idle_decay_secs: f64,
    /// Expected seconds between metric polls. Sizes the history window.
    pub poll_interval_secs: u64,
    /// Time range the history buffer starts with.
    pub default_range: TimeRange,
}

impl RateConfig {
    /// History capacity for `range` at the configured poll cadence.
    pub fn max_points(&self, range: TimeRange) -> usize {
        range.max_points(self.poll_interval_secs)
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            idle_decay_secs: defaults::DEFAULT_IDLE_DECAY_SECS,
            poll_interval_secs: defaults::DEFAULT_POLL_INTERVAL_SECS,
            default_range: defaults::DEFAULT_TIME_RANGE,
        }
    }
}
