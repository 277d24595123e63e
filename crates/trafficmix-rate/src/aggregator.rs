use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};
use trafficmix_core::config::RateConfig;
use trafficmix_core::constants::SECONDS_PER_MINUTE;
use trafficmix_core::ingest_span;
use trafficmix_core::models::{seconds_between, HistoryEntry, IngestOutcome, Sample, TimeRange};
use trafficmix_core::traits::IRateAggregator;

use crate::history::HistoryBuffer;

/// Rolling requests-per-minute estimate over polled counter samples.
///
/// The baseline is the last sample whose counter differed from its
/// predecessor, so rates are measured across the whole gap since requests
/// last moved. Brief polling gaps keep the previous rate; a gap longer than
/// `idle_decay_secs` with no new requests drops it to zero.
///
/// # Examples
///
/// ```
/// use trafficmix_core::models::Sample;
/// use trafficmix_rate::RateAggregator;
///
/// let mut agg = RateAggregator::new();
/// agg.ingest(Sample::at_unix(0, 0).unwrap());
/// let outcome = agg.ingest(Sample::at_unix(60, 120).unwrap());
/// assert_eq!(outcome.rpm, 120.0);
/// assert!(outcome.history_appended);
/// ```
#[derive(Debug, Clone)]
pub struct RateAggregator {
    config: RateConfig,
    range: TimeRange,
    baseline: Option<Sample>,
    /// Timestamp of the newest accepted sample, changed counter or not.
    last_seen: Option<DateTime<Utc>>,
    rpm: f64,
    app_rpm: BTreeMap<String, f64>,
    history: HistoryBuffer,
}

impl RateAggregator {
    /// Create an aggregator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RateConfig::default())
    }

    pub fn with_config(config: RateConfig) -> Self {
        let range = config.default_range;
        let history = HistoryBuffer::with_capacity(config.max_points(range));
        Self {
            config,
            range,
            baseline: None,
            last_seen: None,
            rpm: 0.0,
            app_rpm: BTreeMap::new(),
            history,
        }
    }

    /// Absorb one sample and report the resulting rate.
    pub fn ingest(&mut self, sample: Sample) -> IngestOutcome {
        let _span = ingest_span!(sample.total_requests).entered();

        let Some((base_ts, base_total)) = self
            .baseline
            .as_ref()
            .map(|b| (b.timestamp, b.total_requests))
        else {
            trace!("first sample, baseline set");
            self.last_seen = Some(sample.timestamp);
            self.baseline = Some(sample);
            self.rpm = 0.0;
            return self.outcome(false);
        };

        let delta_time = seconds_between(base_ts, sample.timestamp);
        let out_of_order = self.last_seen.is_some_and(|seen| sample.timestamp < seen);
        if delta_time <= 0.0 || out_of_order {
            debug!(
                timestamp = %sample.timestamp,
                delta_time,
                "stale or out-of-order sample ignored"
            );
            return self.outcome(false);
        }
        self.last_seen = Some(sample.timestamp);

        match sample.total_requests.cmp(&base_total) {
            Ordering::Greater => {
                let delta_requests = sample.total_requests - base_total;
                self.rpm = delta_requests as f64 / delta_time * SECONDS_PER_MINUTE;
                if let Some(base) = &self.baseline {
                    self.app_rpm =
                        app_rates(&base.per_app_counts, &sample.per_app_counts, delta_time);
                }
            }
            Ordering::Equal => {
                if delta_time > self.config.idle_decay_secs {
                    if self.rpm != 0.0 {
                        debug!(delta_time, "no new requests, rate decayed to zero");
                    }
                    self.rpm = 0.0;
                    self.app_rpm.clear();
                }
            }
            Ordering::Less => {
                debug!(
                    previous = base_total,
                    current = sample.total_requests,
                    "request counter reset, baseline re-anchored"
                );
            }
        }

        let changed = sample.total_requests != base_total;
        let appended = changed && self.history.push(HistoryEntry::from_sample(&sample, self.rpm));
        if changed {
            self.baseline = Some(sample);
        }

        trace!(rpm = self.rpm, appended, "sample ingested");
        self.outcome(appended)
    }

    /// Replace the history wholesale (e.g. a server-computed series after a
    /// range switch). The rate baseline is left untouched.
    pub fn replace_history(&mut self, entries: Vec<HistoryEntry>) {
        let offered = entries.len();
        let dropped = self.history.replace(entries);
        debug!(offered, dropped, range = %self.range, "history replaced");
    }

    /// Switch the active time range, resizing the history window.
    pub fn set_range(&mut self, range: TimeRange) {
        self.range = range;
        self.history.set_capacity(self.config.max_points(range));
    }

    /// Forget the baseline, the rate and the history.
    pub fn reset(&mut self) {
        self.baseline = None;
        self.last_seen = None;
        self.rpm = 0.0;
        self.app_rpm.clear();
        self.history.clear();
    }

    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// Per-application rates over the last interval with new requests.
    pub fn app_rpm(&self) -> &BTreeMap<String, f64> {
        &self.app_rpm
    }

    /// Application with the highest current rate. Ties go to the
    /// alphabetically first name; `None` when nothing is flowing.
    pub fn top_app(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (app, &rpm) in &self.app_rpm {
            if rpm > 0.0 && best.map_or(true, |(_, top)| rpm > top) {
                best = Some((app.as_str(), rpm));
            }
        }
        best.map(|(app, _)| app)
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn baseline(&self) -> Option<&Sample> {
        self.baseline.as_ref()
    }

    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    fn outcome(&self, history_appended: bool) -> IngestOutcome {
        IngestOutcome {
            rpm: self.rpm,
            history_appended,
        }
    }
}

impl Default for RateAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl IRateAggregator for RateAggregator {
    fn ingest(&mut self, sample: Sample) -> IngestOutcome {
        RateAggregator::ingest(self, sample)
    }

    fn replace_history(&mut self, entries: Vec<HistoryEntry>) {
        RateAggregator::replace_history(self, entries)
    }
}

/// Per-app requests per minute. Apps whose counter went backwards report 0.
fn app_rates(
    previous: &BTreeMap<String, u64>,
    current: &BTreeMap<String, u64>,
    delta_time: f64,
) -> BTreeMap<String, f64> {
    current
        .iter()
        .map(|(app, &count)| {
            let before = previous.get(app).copied().unwrap_or(0);
            let delta = count.saturating_sub(before);
            (app.clone(), delta as f64 / delta_time * SECONDS_PER_MINUTE)
        })
        .collect()
}
