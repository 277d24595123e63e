//! Ratio-and-reround normalization.
//!
//! Rescales weights by `target / sum` and re-rounds with largest-remainder
//! apportionment, so the result sums to exactly `target` with no drift
//! across repeated calls. A pool that sums to zero is spread evenly.

use trafficmix_core::models::{WeightItem, WeightTree};

use crate::apportion::apportion;

/// Rescale `items` so their weights sum to `target`.
/// Returns `true` if any weight changed.
pub fn normalize_items(items: &mut [WeightItem], target: u64) -> bool {
    let sum: u128 = items.iter().map(|i| u128::from(i.weight)).sum();
    if items.is_empty() || sum == u128::from(target) {
        return false;
    }
    let weights: Vec<u64> = items.iter().map(|i| i.weight).collect();
    for (item, weight) in items.iter_mut().zip(apportion(&weights, target)) {
        item.weight = weight;
    }
    true
}

/// Rescale every item in `tree` so the whole tree sums to `target`.
/// Returns `true` if any weight changed.
pub fn normalize_tree(tree: &mut WeightTree, target: u64) -> bool {
    let weights: Vec<u64> = tree.items().map(|i| i.weight).collect();
    let sum: u128 = weights.iter().map(|&w| u128::from(w)).sum();
    if weights.is_empty() || sum == u128::from(target) {
        return false;
    }
    for (item, weight) in tree.items_mut().zip(apportion(&weights, target)) {
        item.weight = weight;
    }
    true
}
