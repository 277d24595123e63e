use proptest::prelude::*;
use trafficmix_core::models::{Category, WeightItem, WeightTree};
use trafficmix_weights::WeightEngine;

/// Arbitrary tree of 1–4 non-empty categories, settled to the global total.
fn arb_settled_tree() -> impl Strategy<Value = WeightTree> {
    prop::collection::vec(prop::collection::vec(0u64..500, 1..5), 1..5).prop_map(|cats| {
        let tree = WeightTree::new(
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
        );
        WeightEngine::new().settle(&tree)
    })
}

#[derive(Debug, Clone)]
enum Edit {
    Item { category: usize, item: usize, percent: f64 },
    Category { category: usize, percent: f64 },
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..4, 0usize..4, 0.0f64..=100.0).prop_map(|(category, item, percent)| Edit::Item {
            category,
            item,
            percent
        }),
        (0usize..4, 0.0f64..=100.0)
            .prop_map(|(category, percent)| Edit::Category { category, percent }),
    ]
}

fn apply(engine: &WeightEngine, tree: &WeightTree, edit: &Edit) -> WeightTree {
    match *edit {
        Edit::Item {
            category,
            item,
            percent,
        } => engine.set_item_percent(
            tree,
            &format!("cat-{category}"),
            &format!("app-{category}-{item}"),
            percent,
        ),
        Edit::Category { category, percent } => {
            engine.set_category_percent(tree, &format!("cat-{category}"), percent)
        }
    }
}

// ── Global sum holds after every edit in any sequence ───────────────────

proptest! {
    #[test]
    fn global_sum_is_preserved(
        tree in arb_settled_tree(),
        edits in prop::collection::vec(arb_edit(), 1..20),
    ) {
        let engine = WeightEngine::new();
        let mut current = tree;
        for edit in &edits {
            current = apply(&engine, &current, edit);
            prop_assert_eq!(current.total(), u128::from(engine.global_total()), "after {:?}", edit);
        }
    }
}

// ── Item edits never move other categories' totals ──────────────────────

proptest! {
    #[test]
    fn item_edit_preserves_category_totals(
        tree in arb_settled_tree(),
        category in 0usize..4,
        item in 0usize..4,
        percent in 0.0f64..=100.0,
    ) {
        let name = format!("cat-{category}");
        // Zero-weight categories are seeded from the global total instead.
        prop_assume!(tree.category_total(&name).map_or(true, |t| t > 0));

        let engine = WeightEngine::new();
        let next = engine.set_item_percent(&tree, &name, &format!("app-{category}-{item}"), percent);
        for (before, after) in tree.categories.iter().zip(&next.categories) {
            prop_assert_eq!(before.total(), after.total(), "category {}", before.name);
        }
    }
}

// ── Repeating an item edit is a fixed point ─────────────────────────────

proptest! {
    #[test]
    fn item_edit_is_idempotent(
        tree in arb_settled_tree(),
        category in 0usize..4,
        item in 0usize..4,
        percent in 0.0f64..=100.0,
    ) {
        let name = format!("cat-{category}");
        prop_assume!(tree.category_total(&name).map_or(true, |t| t > 0));

        let engine = WeightEngine::new();
        let id = format!("app-{category}-{item}");
        let once = engine.set_item_percent(&tree, &name, &id, percent);
        let twice = engine.set_item_percent(&once, &name, &id, percent);
        prop_assert_eq!(once, twice);
    }
}

// ── Category edits land within one unit of the requested share ──────────

proptest! {
    #[test]
    fn category_edit_hits_requested_share(
        tree in arb_settled_tree(),
        category in 0usize..4,
        percent in 0.0f64..=100.0,
    ) {
        let name = format!("cat-{category}");
        prop_assume!(tree.category(&name).is_some());
        prop_assume!(tree.categories.len() > 1);

        let engine = WeightEngine::new();
        let next = engine.set_category_percent(&tree, &name, percent);
        let expected = (percent / 100.0 * engine.global_total() as f64).round() as i64;
        let actual = next.category_total(&name).unwrap() as i64;
        prop_assert!((expected - actual).abs() <= 1, "expected {} got {}", expected, actual);
    }
}
