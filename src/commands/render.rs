//! Render command handler

use std::path::PathBuf;

use anyhow::Result;

use treenav::application::RenderMenuUseCase;
use treenav::config::Config;
use treenav::domain::services::url_policy::effective_url;
use treenav::infrastructure::{StaticRouteTable, TomlMenuStore};
use treenav::models::MenuSlug;
use treenav::presentation::{menu_to_json, HtmlMenuView};

use crate::ui;

pub fn cmd_render(
    menu: &str,
    location: &str,
    menus: Option<PathBuf>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let config = Config::load_or_default(Some(&project_root));

    let menus_path = menus.unwrap_or_else(|| config.menus.path.clone());
    let store = TomlMenuStore::new(menus_path);
    let routes = StaticRouteTable::new(config.routes.clone());

    let slug = MenuSlug::new(menu);
    let render = RenderMenuUseCase::new(&store, &routes).render(&slug, location)?;

    if json {
        let out = serde_json::json!({
            "event": "data",
            "command": "render",
            "slug": menu,
            "location": location,
            "warnings": render.warnings,
            "menu": menu_to_json(&render, &routes),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for warning in &render.warnings {
        ui::print_warning(warning);
    }

    if verbose > 0 {
        for id in render.forest.preorder() {
            let node = render.forest.node(id);
            ui::print_detail(&format!(
                "{} -> {}",
                node.record.title,
                effective_url(&node.record, &routes)
            ));
        }
    }

    print!("{}", HtmlMenuView::new(&render, &routes).to_html());
    Ok(())
}
