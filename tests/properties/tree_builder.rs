//! Property tests for the tree builder.

use proptest::prelude::*;

use treenav::domain::services::tree_builder::{self, TreeBuild, TreeBuildError};
use treenav::models::{ItemId, MenuItemRecord};

/// Small id space with random parents: provokes duplicates, danglers and
/// cycles alongside well-formed inputs.
fn arb_records() -> impl Strategy<Value = Vec<MenuItemRecord>> {
    proptest::collection::vec(
        (0u64..16, proptest::option::of(0u64..16), 0i64..4),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(id, parent, order)| {
                let mut record = MenuItemRecord::new(id, format!("item-{id}")).with_order(order);
                if let Some(parent) = parent {
                    record = record.with_parent(parent);
                }
                record
            })
            .collect()
    })
}

fn preorder_ids(build: &TreeBuild) -> Vec<ItemId> {
    build
        .forest
        .preorder()
        .map(|id| build.forest.node(id).id())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: building never panics; it returns a forest or one of the
    /// two structural errors, and a returned forest holds every record
    /// exactly once.
    #[test]
    fn property_build_never_panics(records in arb_records()) {
        let count = records.len();
        match tree_builder::build(records) {
            Ok(build) => {
                prop_assert_eq!(build.forest.len(), count);

                let mut ids = preorder_ids(&build);
                prop_assert_eq!(ids.len(), count, "pre-order must reach every node");
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), count, "no node may appear twice");
            }
            Err(TreeBuildError::DuplicateId { .. }) | Err(TreeBuildError::CycleDetected { .. }) => {}
        }
    }

    /// PROPERTY: repeated builds from the same input produce identical
    /// sibling order (and identical errors).
    #[test]
    fn property_build_is_deterministic(records in arb_records()) {
        let first = tree_builder::build(records.clone()).map(|build| preorder_ids(&build));
        let second = tree_builder::build(records).map(|build| preorder_ids(&build));
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: children are sorted by order key within every sibling
    /// list the builder returns.
    #[test]
    fn property_sibling_lists_are_sorted(records in arb_records()) {
        if let Ok(build) = tree_builder::build(records) {
            let forest = &build.forest;

            let assert_sorted = |ids: &[treenav::NodeId]| {
                ids.windows(2).all(|pair| {
                    forest.node(pair[0]).record.order <= forest.node(pair[1]).record.order
                })
            };

            prop_assert!(assert_sorted(forest.roots()));
            for id in forest.preorder() {
                prop_assert!(assert_sorted(&forest.node(id).children));
            }
        }
    }

    /// PROPERTY: depth always equals the number of ancestors.
    #[test]
    fn property_depth_matches_ancestor_count(records in arb_records()) {
        if let Ok(build) = tree_builder::build(records) {
            let forest = &build.forest;
            for id in forest.preorder() {
                prop_assert_eq!(forest.node(id).depth, forest.ancestors(id).count());
            }
        }
    }
}
