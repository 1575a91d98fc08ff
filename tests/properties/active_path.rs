//! Property tests for active-path resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use treenav::domain::ports::NoRoutes;
use treenav::domain::services::{active_path, tree_builder};
use treenav::models::{ItemId, MenuItemRecord};
use treenav::Forest;

/// Well-formed trees: each item may only parent onto an earlier item, so
/// ids are unique and chains are acyclic by construction. Every item gets
/// a distinct URL.
fn arb_tree() -> impl Strategy<Value = Vec<MenuItemRecord>> {
    proptest::collection::vec((proptest::option::of(proptest::num::usize::ANY), 0i64..4), 1..20)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (parent, order))| {
                    let mut record = MenuItemRecord::new(i as u64, format!("item-{i}"))
                        .with_url(format!("/page-{i}/"))
                        .with_order(order);
                    if i > 0 {
                        if let Some(parent) = parent {
                            record = record.with_parent((parent % i) as u64);
                        }
                    }
                    record
                })
                .collect()
        })
}

fn root_ids(forest: &Forest) -> BTreeSet<ItemId> {
    forest
        .roots()
        .iter()
        .map(|&root| forest.node(root).id())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every root id is in the expansion set, whatever the
    /// location matched.
    #[test]
    fn property_roots_are_always_expanded(records in arb_tree(), pick in any::<proptest::sample::Index>()) {
        let location = format!("/page-{}/", pick.index(records.len()));
        let forest = tree_builder::build(records).unwrap().forest;

        let resolved = active_path::resolve(&forest, &location, &NoRoutes);
        for id in root_ids(&forest) {
            prop_assert!(resolved.expanded.contains(&id));
        }
    }

    /// PROPERTY: the expansion set is exactly the roots, the active
    /// node's ancestors, and the active node itself.
    #[test]
    fn property_expansion_is_roots_plus_active_trail(records in arb_tree(), pick in any::<proptest::sample::Index>()) {
        let location = format!("/page-{}/", pick.index(records.len()));
        let forest = tree_builder::build(records).unwrap().forest;

        let resolved = active_path::resolve(&forest, &location, &NoRoutes);
        let active = resolved.active.expect("every generated location matches one node");

        let mut expected = root_ids(&forest);
        expected.insert(forest.node(active).id());
        expected.extend(forest.ancestors(active).map(|id| forest.node(id).id()));

        prop_assert_eq!(&resolved.expanded, &expected);
    }

    /// PROPERTY: a location that matches nothing leaves exactly the root
    /// set expanded and no active node.
    #[test]
    fn property_no_match_expands_roots_only(records in arb_tree()) {
        let forest = tree_builder::build(records).unwrap().forest;

        let resolved = active_path::resolve(&forest, "/nowhere/", &NoRoutes);
        prop_assert!(resolved.active.is_none());
        prop_assert_eq!(&resolved.expanded, &root_ids(&forest));
    }

    /// PROPERTY: the active node is the one whose URL equals the
    /// location, and resolution never invents an id outside the forest.
    #[test]
    fn property_active_matches_the_location(records in arb_tree(), pick in any::<proptest::sample::Index>()) {
        let picked = pick.index(records.len());
        let location = format!("/page-{picked}/");
        let forest = tree_builder::build(records).unwrap().forest;

        let resolved = active_path::resolve(&forest, &location, &NoRoutes);
        let active = resolved.active.expect("location matches");

        // URLs are distinct by construction, so the match is unambiguous.
        prop_assert_eq!(forest.node(active).id(), ItemId(picked as u64));
    }
}
