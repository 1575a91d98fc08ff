//! Render-menu use case
//!
//! One call to the storage port, one build, one resolve. The output value
//! object carries everything a display layer needs; nothing about it
//! survives past the render call or is shared with other menus.

use std::collections::BTreeSet;

use crate::domain::entities::Forest;
use crate::domain::ports::{MenuSource, RouteResolver};
use crate::domain::services::{active_path, tree_builder};
use crate::error::MenuResult;
use crate::models::{ItemId, MenuSlug};

/// Render output for one menu
#[derive(Debug, Clone, Default)]
pub struct MenuRender {
    pub active: Option<ItemId>,
    /// Ids of nodes whose direct children are drawn
    pub expanded: BTreeSet<ItemId>,
    pub forest: Forest,
    pub warnings: Vec<String>,
}

pub struct RenderMenuUseCase<'a> {
    source: &'a dyn MenuSource,
    routes: &'a dyn RouteResolver,
}

impl<'a> RenderMenuUseCase<'a> {
    pub fn new(source: &'a dyn MenuSource, routes: &'a dyn RouteResolver) -> Self {
        Self { source, routes }
    }

    /// Render one menu against the current request location.
    ///
    /// Exactly one retrieval happens here regardless of tree depth or
    /// breadth. An unknown slug renders as an empty menu; structural
    /// problems in the record set abort the render instead of returning a
    /// partial tree.
    pub fn render(&self, slug: &MenuSlug, current_location: &str) -> MenuResult<MenuRender> {
        // The single retrieval for this render.
        let records = self.source.menu_items(slug)?;

        let built = tree_builder::build(records)?;
        let resolved = active_path::resolve(&built.forest, current_location, self.routes);

        Ok(MenuRender {
            active: resolved.active.map(|id| built.forest.node(id).id()),
            expanded: resolved.expanded,
            forest: built.forest,
            warnings: built.warnings,
        })
    }
}
