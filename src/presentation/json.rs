//! JSON menu view
//!
//! Machine-readable shape of a finished render: nested item objects plus
//! the active id and the expansion set, for `--json` consumers.

use serde_json::{json, Value};

use crate::application::MenuRender;
use crate::domain::entities::NodeId;
use crate::domain::ports::RouteResolver;
use crate::domain::services::url_policy::effective_url;

/// Nested JSON items for one render
pub fn menu_to_json(render: &MenuRender, routes: &dyn RouteResolver) -> Value {
    let items: Vec<Value> = render
        .forest
        .roots()
        .iter()
        .map(|&id| item_to_json(render, routes, id))
        .collect();

    json!({
        "active": render.active.map(|id| id.0),
        "expanded": render.expanded.iter().map(|id| id.0).collect::<Vec<_>>(),
        "items": items,
    })
}

fn item_to_json(render: &MenuRender, routes: &dyn RouteResolver, id: NodeId) -> Value {
    let node = render.forest.node(id);
    let children: Vec<Value> = node
        .children
        .iter()
        .map(|&child| item_to_json(render, routes, child))
        .collect();

    json!({
        "id": node.id().0,
        "title": node.record.title,
        "url": effective_url(&node.record, routes),
        "active": render.active == Some(node.id()),
        "children": children,
    })
}
