//! # trafficmix-rate
//!
//! Derives a requests-per-minute signal from monotonic counter samples and
//! keeps a bounded, strictly time-ordered history for charting.

pub mod aggregator;
pub mod history;

pub use aggregator::RateAggregator;
pub use history::HistoryBuffer;
