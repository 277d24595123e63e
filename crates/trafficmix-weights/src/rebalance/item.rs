use tracing::{debug, warn};
use trafficmix_core::config::WeightsConfig;
use trafficmix_core::models::WeightTree;
use trafficmix_core::rebalance_span;

use super::{bounded, narrow};
use crate::apportion::{percent_of, redistribute};
use crate::normalize::{normalize_items, normalize_tree};

/// Move one application's slider inside its category.
///
/// The item takes `target_percent` of the category total; its siblings share
/// the rest in proportion to their pre-edit weights. The category total is
/// unchanged, so other categories are never touched, except when the
/// category starts at zero or the tree total overflows `u64`: the tree is
/// then settled to the global total.
pub(crate) fn set_item_percent(
    tree: &WeightTree,
    category: &str,
    item_id: &str,
    target_percent: f64,
    config: &WeightsConfig,
) -> WeightTree {
    let _span = rebalance_span!("item", category, target_percent).entered();

    if !target_percent.is_finite() {
        warn!(category, item = item_id, target_percent, "non-finite percent, edit ignored");
        return tree.clone();
    }
    let Some(cat_index) = tree.category_index(category) else {
        debug!(category, "unknown category, edit ignored");
        return tree.clone();
    };
    let Some(item_index) = tree.categories[cat_index].position(item_id) else {
        debug!(category, item = item_id, "unknown item, edit ignored");
        return tree.clone();
    };

    let percent = target_percent.clamp(0.0, 100.0);
    let category_count = tree.categories.len() as u64;
    let mut next = bounded(tree, config.global_total);
    let cat = &mut next.categories[cat_index];

    let current_total = narrow(cat.total());
    let fallback = current_total == 0;
    let category_total = if fallback {
        config.global_total / category_count
    } else {
        current_total
    };

    let target_weight = percent_of(percent, category_total);
    let siblings: Vec<u64> = cat
        .items
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != item_index)
        .map(|(_, item)| item.weight)
        .collect();
    let mut shares = redistribute(
        &siblings,
        category_total - target_weight,
        config.empty_pool_policy,
    )
    .into_iter();

    for (i, item) in cat.items.iter_mut().enumerate() {
        item.weight = if i == item_index {
            target_weight
        } else {
            shares.next().unwrap_or(0)
        };
    }

    if normalize_items(&mut cat.items, category_total) {
        debug!(category, category_total, "category re-normalized after rounding");
    }

    if fallback {
        // The category had nothing to redistribute and was seeded from the
        // global total; settle so the tree sum holds again.
        normalize_tree(&mut next, config.global_total);
        debug!(category, category_total, "empty category seeded, tree re-settled");
    }

    debug!(category, item = item_id, weight = target_weight, "item rebalanced");
    next
}
