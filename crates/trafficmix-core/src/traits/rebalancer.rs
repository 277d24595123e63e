use crate::models::WeightTree;

/// Slider-driven edits of a weight hierarchy.
///
/// Implementations are pure: the input tree is never modified and the
/// returned tree always satisfies the global-sum invariant.
pub trait IRebalancer: Send + Sync {
    /// Give `item_id` `target_percent` of its own category's total.
    fn set_item_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        item_id: &str,
        target_percent: f64,
    ) -> WeightTree;

    /// Give `category` `target_percent` of the whole tree.
    fn set_category_percent(
        &self,
        tree: &WeightTree,
        category: &str,
        target_percent: f64,
    ) -> WeightTree;
}
