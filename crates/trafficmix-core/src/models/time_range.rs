use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Window of live history shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::FiveMinutes,
        TimeRange::FifteenMinutes,
        TimeRange::OneHour,
        TimeRange::SixHours,
        TimeRange::OneDay,
    ];

    pub fn seconds(self) -> u64 {
        match self {
            TimeRange::FiveMinutes => 5 * 60,
            TimeRange::FifteenMinutes => 15 * 60,
            TimeRange::OneHour => 60 * 60,
            TimeRange::SixHours => 6 * 60 * 60,
            TimeRange::OneDay => 24 * 60 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::FiveMinutes => "5m",
            TimeRange::FifteenMinutes => "15m",
            TimeRange::OneHour => "1h",
            TimeRange::SixHours => "6h",
            TimeRange::OneDay => "24h",
        }
    }

    /// Number of history points that cover this range when samples arrive
    /// every `poll_interval_secs`. Never less than one.
    pub fn max_points(self, poll_interval_secs: u64) -> usize {
        (self.seconds() / poll_interval_secs.max(1)).max(1) as usize
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "range".to_string(),
                message: format!("unknown time range '{s}'"),
            })
    }
}
