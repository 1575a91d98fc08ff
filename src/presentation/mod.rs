//! Presentation Layer
//!
//! Views over a finished `MenuRender`. Markup generation only - the
//! resolve work is done before anything here runs.

mod html;
mod json;

pub use html::{escape_attr, escape_text, HtmlMenuView};
pub use json::menu_to_json;
