use proptest::prelude::*;
use trafficmix_core::models::{Category, TimeRange, WeightItem, WeightTree};

fn arb_tree() -> impl Strategy<Value = WeightTree> {
    prop::collection::vec(prop::collection::vec(0u64..50, 0..4), 0..4).prop_map(|cats| {
        WeightTree::new(
            cats.into_iter()
                .enumerate()
                .map(|(c, weights)| {
                    Category::with_items(
                        format!("cat-{c}"),
                        weights
                            .into_iter()
                            .enumerate()
                            .map(|(i, w)| WeightItem::new(format!("app-{c}-{i}"), w))
                            .collect(),
                    )
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn pick_never_selects_zero_weight(tree in arb_tree(), roll in 0.0f64..1.0) {
        match tree.pick(roll) {
            Some(item) => prop_assert!(item.weight > 0),
            None => prop_assert_eq!(tree.total(), 0),
        }
    }
}

proptest! {
    #[test]
    fn percents_of_a_non_empty_tree_sum_to_one_hundred(tree in arb_tree()) {
        prop_assume!(tree.total() > 0);
        let sum: f64 = tree
            .categories
            .iter()
            .filter_map(|c| tree.category_percent(&c.name))
            .sum();
        prop_assert!((sum - 100.0).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn max_points_is_at_least_one(poll in 0u64..200_000) {
        for range in TimeRange::ALL {
            prop_assert!(range.max_points(poll) >= 1);
        }
    }
}
