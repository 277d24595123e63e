//! The two slider-driven rebalancing operations.

mod category;
mod item;

pub(crate) use category::set_category_percent;
pub(crate) use item::set_item_percent;

use tracing::debug;
use trafficmix_core::models::WeightTree;

use crate::normalize::normalize_tree;

/// Copy of `tree` whose total fits in `u64`. Oversized snapshots are
/// settled to `global_total` first.
fn bounded(tree: &WeightTree, global_total: u64) -> WeightTree {
    let mut next = tree.clone();
    let total = tree.total();
    if total > u128::from(u64::MAX) {
        normalize_tree(&mut next, global_total);
        debug!(previous_total = %total, global_total, "oversized tree settled before edit");
    }
    next
}

/// A total from a [`bounded`] tree as `u64`.
fn narrow(total: u128) -> u64 {
    u64::try_from(total).unwrap_or(u64::MAX)
}
