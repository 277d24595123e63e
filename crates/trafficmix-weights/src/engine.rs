use std::collections::BTreeMap;

use tracing::{debug, info};
use trafficmix_core::config::WeightsConfig;
use trafficmix_core::models::WeightTree;
use trafficmix_core::traits::IRebalancer;

use crate::normalize::normalize_tree;
use crate::rebalance;

/// Weight-redistribution engine.
///
/// Every operation takes a tree snapshot and returns a new one; the input is
/// never modified. Returned trees always sum to the configured global total.
///
/// # Examples
///
/// ```
/// use trafficmix_core::models::{Category, WeightItem, WeightTree};
/// use trafficmix_weights::WeightEngine;
///
/// let engine = WeightEngine::new();
/// let tree = WeightTree::new(vec![Category::with_items(
///     "web",
///     vec![WeightItem::new("a.com", 500), WeightItem::new("b.com", 500)],
/// )]);
///
/// let next = engine.set_item_percent(&tree, "web", "a.com", 100.0);
/// assert_eq!(next.category("web").unwrap().items[0].weight, 1000);
/// assert_eq!(next.category("web").unwrap().items[1].weight, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightEngine {
    config: WeightsConfig,
}

impl WeightEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WeightsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WeightsConfig {
        &self.config
    }

    pub fn global_total(&self) -> u64 {
        self.config.global_total
    }

    /// Give `item_id` `target_percent` (clamped to `[0, 100]`) of its own
    /// category's total. Unknown names leave the tree unchanged.
    ///
    /// Other categories keep their totals, with two exceptions. If the edited
    /// category sums to zero, it is seeded with `global_total / categories`
    /// and the whole tree is re-settled, so other categories shrink. A tree
    /// whose total overflows `u64` is settled before the edit.
    pub fn set_item_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        item_id: &str,
        target_percent: f64,
    ) -> WeightTree {
        rebalance::set_item_percent(tree, category, item_id, target_percent, &self.config)
    }

    /// Give `category` `target_percent` (clamped to `[0, 100]`) of the whole
    /// tree. Unknown or item-less categories leave the tree unchanged.
    pub fn set_category_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        target_percent: f64,
    ) -> WeightTree {
        rebalance::set_category_percent(tree, category, target_percent, &self.config)
    }

    /// Bring an imported snapshot to the global total, keeping every item's
    /// relative share. An all-zero tree is spread evenly.
    pub fn settle(&self, tree: &WeightTree) -> WeightTree {
        let mut next = tree.clone();
        if normalize_tree(&mut next, self.config.global_total) {
            info!(
                previous_total = %tree.total(),
                global_total = self.config.global_total,
                "weight tree settled"
            );
        }
        next
    }

    /// Overwrite weights by item id, then settle. Ids not in the tree are ignored.
    pub fn apply_weights(&self, tree: &WeightTree, updates: &BTreeMap<String, u64>) -> WeightTree {
        let mut next = tree.clone();
        let mut applied = 0usize;
        for item in next.items_mut() {
            if let Some(&weight) = updates.get(&item.id) {
                item.weight = weight;
                applied += 1;
            }
        }
        if applied < updates.len() {
            debug!(
                requested = updates.len(),
                applied,
                "bulk update named unknown items"
            );
        }
        self.settle(&next)
    }

    /// Whether `tree` already sums to the global total.
    pub fn is_settled(&self, tree: &WeightTree) -> bool {
        tree.total() == u128::from(self.config.global_total)
    }
}

impl IRebalancer for WeightEngine {
    fn set_item_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        item_id: &str,
        target_percent: f64,
    ) -> WeightTree {
        WeightEngine::set_item_percent(self, tree, category, item_id, target_percent)
    }

    fn set_category_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        target_percent: f64,
    ) -> WeightTree {
        WeightEngine::set_category_percent(self, tree, category, target_percent)
    }
}
