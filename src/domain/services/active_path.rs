//! Active-path resolver
//!
//! Walks the built forest once: finds the item matching the current
//! request location and derives the expansion set - the ids of nodes
//! whose direct children should be rendered.

use std::collections::BTreeSet;

use crate::domain::entities::{Forest, NodeId};
use crate::domain::ports::RouteResolver;
use crate::domain::services::url_policy::effective_url;
use crate::models::ItemId;

/// Resolution outcome for one render
///
/// `expanded` holds every root's id, every ancestor of the active node,
/// and the active node itself. A node outside the set still renders, but
/// its children stay hidden.
#[derive(Debug, Clone, Default)]
pub struct ActivePath {
    pub active: Option<NodeId>,
    pub expanded: BTreeSet<ItemId>,
}

/// Find the active node and compute the expansion set.
///
/// Effective URLs are compared against `current_location` by exact string
/// equality; the first pre-order match wins when several items share a
/// URL. With no match only the root level stays expanded.
pub fn resolve(
    forest: &Forest,
    current_location: &str,
    routes: &dyn RouteResolver,
) -> ActivePath {
    let active = forest
        .preorder()
        .find(|&id| effective_url(&forest.node(id).record, routes) == current_location);

    let mut expanded: BTreeSet<ItemId> = forest
        .roots()
        .iter()
        .map(|&root| forest.node(root).id())
        .collect();

    if let Some(active_id) = active {
        expanded.insert(forest.node(active_id).id());
        expanded.extend(forest.ancestors(active_id).map(|id| forest.node(id).id()));
    }

    ActivePath { active, expanded }
}
