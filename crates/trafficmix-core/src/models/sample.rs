use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One poll of the backend's request counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Monotonic request counter (may be reset externally).
    pub total_requests: u64,
    #[serde(default)]
    pub per_app_counts: BTreeMap<String, u64>,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, total_requests: u64) -> Self {
        Self {
            timestamp,
            total_requests,
            per_app_counts: BTreeMap::new(),
        }
    }

    /// Build a sample from unix seconds. Returns `None` for out-of-range timestamps.
    pub fn at_unix(secs: i64, total_requests: u64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(|ts| Self::new(ts, total_requests))
    }

    pub fn with_app(mut self, app: impl Into<String>, count: u64) -> Self {
        self.per_app_counts.insert(app.into(), count);
        self
    }
}

/// A point of the rolling requests-per-minute history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub rpm: f64,
    pub total_requests: u64,
    #[serde(default)]
    pub per_app_counts: BTreeMap<String, u64>,
}

impl HistoryEntry {
    pub fn from_sample(sample: &Sample, rpm: f64) -> Self {
        Self {
            timestamp: sample.timestamp,
            rpm,
            total_requests: sample.total_requests,
            per_app_counts: sample.per_app_counts.clone(),
        }
    }
}

/// Signed seconds from `earlier` to `later`, millisecond precision.
pub fn seconds_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0
}

/// Result of feeding one sample to a rate aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngestOutcome {
    /// Requests per minute after the sample was absorbed.
    pub rpm: f64,
    pub history_appended: bool,
}
