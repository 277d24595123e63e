//! # trafficmix-weights
//!
//! Keeps a category → application weight hierarchy consistent under
//! single-slider edits at either level, preserving the global sum exactly.

mod apportion;
pub mod engine;
pub mod normalize;
pub mod profile;
mod rebalance;

pub use engine::WeightEngine;
pub use normalize::{normalize_items, normalize_tree};
pub use profile::{parse_profile, render_profile};
