//! # trafficmix-core
//!
//! Foundation crate for the traffic-mix engines.
//! Defines the weight hierarchy and sample models, traits, errors, config,
//! tracing setup and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::MixerConfig;
pub use errors::{MixError, MixResult};
pub use models::{
    Category, HistoryEntry, IngestOutcome, Sample, TimeRange, WeightItem, WeightTree,
};
