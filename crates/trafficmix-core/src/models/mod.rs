pub mod sample;
pub mod time_range;
pub mod weight_tree;

pub use sample::{seconds_between, HistoryEntry, IngestOutcome, Sample};
pub use time_range::TimeRange;
pub use weight_tree::{Category, WeightItem, WeightTree};
