use crate::models::{HistoryEntry, IngestOutcome, Sample};

/// Turns monotonic counter samples into a rate and a bounded history.
pub trait IRateAggregator {
    /// Absorb one sample. Stale or out-of-order samples are ignored, never errors.
    fn ingest(&mut self, sample: Sample) -> IngestOutcome;

    /// Replace the history wholesale, leaving the rate baseline untouched.
    fn replace_history(&mut self, entries: Vec<HistoryEntry>);
}
