//! HTML menu view
//!
//! Nested `<ul>`/`<li>` markup in the shape stylesheets expect:
//! a `menu-level-N` class per depth and an `active` class on the matched
//! item. Collapsed branches are omitted from the markup entirely rather
//! than hidden with styling.

use crate::application::MenuRender;
use crate::domain::entities::NodeId;
use crate::domain::ports::RouteResolver;
use crate::domain::services::url_policy::effective_url;

pub struct HtmlMenuView<'a> {
    render: &'a MenuRender,
    routes: &'a dyn RouteResolver,
}

impl<'a> HtmlMenuView<'a> {
    pub fn new(render: &'a MenuRender, routes: &'a dyn RouteResolver) -> Self {
        Self { render, routes }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.push_level(&mut html, self.render.forest.roots(), 0);
        html
    }

    fn push_level(&self, html: &mut String, level_nodes: &[NodeId], level: usize) {
        if level_nodes.is_empty() {
            return;
        }

        html.push_str(&format!("<ul class=\"menu-level-{level}\">\n"));
        for &id in level_nodes {
            let node = self.render.forest.node(id);
            let css = if self.render.active == Some(node.id()) {
                " class=\"active\""
            } else {
                ""
            };
            let url = effective_url(&node.record, self.routes);
            html.push_str(&format!(
                "<li{}><a href=\"{}\">{}</a>",
                css,
                escape_attr(&url),
                escape_text(&node.record.title)
            ));

            if self.render.expanded.contains(&node.id()) && !node.children.is_empty() {
                html.push('\n');
                self.push_level(html, &node.children, level + 1);
            }
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }
}

/// Escape a string for HTML text content
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape a string for a double-quoted HTML attribute value
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
