use tracing::{debug, warn};
use trafficmix_core::config::WeightsConfig;
use trafficmix_core::models::WeightTree;
use trafficmix_core::rebalance_span;

use super::{bounded, narrow};
use crate::apportion::{percent_of, redistribute};
use crate::normalize::{normalize_items, normalize_tree};

/// Move a category's slider.
///
/// The category takes `target_percent` of the current tree total and the
/// other non-empty categories absorb the rest in proportion to their
/// totals. Item shares inside every category are kept, then the whole
/// tree is settled to the configured global total.
pub(crate) fn set_category_percent(
    tree: &WeightTree,
    category: &str,
    target_percent: f64,
    config: &WeightsConfig,
) -> WeightTree {
    let _span = rebalance_span!("category", category, target_percent).entered();

    if !target_percent.is_finite() {
        warn!(category, target_percent, "non-finite percent, edit ignored");
        return tree.clone();
    }
    let Some(cat_index) = tree.category_index(category) else {
        debug!(category, "unknown category, edit ignored");
        return tree.clone();
    };
    if tree.categories[cat_index].is_empty() {
        debug!(category, "category has no items, edit ignored");
        return tree.clone();
    }

    let percent = target_percent.clamp(0.0, 100.0);
    let mut next = bounded(tree, config.global_total);
    let current_total = match narrow(next.total()) {
        0 => config.global_total,
        total => total,
    };
    let new_total = percent_of(percent, current_total);

    let others: Vec<usize> = next
        .categories
        .iter()
        .enumerate()
        .filter(|&(i, c)| i != cat_index && !c.is_empty())
        .map(|(i, _)| i)
        .collect();
    let other_totals: Vec<u64> = others
        .iter()
        .map(|&i| narrow(next.categories[i].total()))
        .collect();
    let other_new = redistribute(
        &other_totals,
        current_total - new_total,
        config.empty_pool_policy,
    );

    normalize_items(&mut next.categories[cat_index].items, new_total);
    for (&i, total) in others.iter().zip(other_new) {
        normalize_items(&mut next.categories[i].items, total);
    }

    if normalize_tree(&mut next, config.global_total) {
        debug!(category, global_total = config.global_total, "tree re-settled");
    }

    debug!(category, total = new_total, "category rebalanced");
    next
}
