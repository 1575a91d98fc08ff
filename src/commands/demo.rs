//! Demo command handler
//!
//! Seeds a working three-level demonstration menu plus the route table it
//! needs, so a fresh directory can render something immediately.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use treenav::config::CONFIG_FILE_NAME;
use treenav::infrastructure::{MenusDocument, StoredItem, StoredMenu};
use treenav::models::MenuSlug;

use crate::ui;

const MENUS_FILE_NAME: &str = "menus.toml";

const DEMO_CONFIG: &str = r#"# Treenav project configuration
[menus]
path = "menus.toml"

# Named route table: route name -> literal path
[routes]
home = "/"
about = "/about/"
services = "/services/"
contact = "/contact/"
"#;

pub fn cmd_demo(dir: &Path, force: bool, json: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let menus_path = dir.join(MENUS_FILE_NAME);

    if !force {
        for path in [&config_path, &menus_path] {
            if path.exists() {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
        }
    }

    let menus_toml =
        toml::to_string_pretty(&demo_document()).context("serializing demo menus")?;

    fs::create_dir_all(dir)
        .with_context(|| format!("creating directory {}", dir.display()))?;
    fs::write(&menus_path, menus_toml)
        .with_context(|| format!("writing {}", menus_path.display()))?;
    fs::write(&config_path, DEMO_CONFIG)
        .with_context(|| format!("writing {}", config_path.display()))?;

    if json {
        let out = serde_json::json!({
            "event": "data",
            "command": "demo",
            "files": [menus_path, config_path],
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    ui::print_success(&format!("wrote {}", menus_path.display()));
    ui::print_success(&format!("wrote {}", config_path.display()));
    ui::print_detail("try: treenav render main --location /services/frontend/");
    Ok(())
}

/// Main menu with three levels of nesting, plus a flat footer menu.
fn demo_document() -> MenusDocument {
    MenusDocument {
        menus: vec![
            StoredMenu {
                name: "Main menu".to_string(),
                slug: MenuSlug::new("main"),
                items: vec![
                    StoredItem::new(1, "Home").with_named_route("home"),
                    StoredItem::new(2, "About").with_named_route("about").with_order(1),
                    StoredItem::new(3, "Services")
                        .with_named_route("services")
                        .with_order(2),
                    StoredItem::new(4, "Contact")
                        .with_named_route("contact")
                        .with_order(3),
                    StoredItem::new(5, "Web development")
                        .with_parent(3)
                        .with_url("/services/web-development/"),
                    StoredItem::new(6, "Mobile apps")
                        .with_parent(3)
                        .with_url("/services/mobile-apps/")
                        .with_order(1),
                    StoredItem::new(7, "Consulting")
                        .with_parent(3)
                        .with_url("/services/consulting/")
                        .with_order(2),
                    StoredItem::new(8, "Support")
                        .with_parent(3)
                        .with_url("/services/support/")
                        .with_order(3),
                    StoredItem::new(9, "Frontend")
                        .with_parent(5)
                        .with_url("/services/frontend/"),
                    StoredItem::new(10, "Backend")
                        .with_parent(5)
                        .with_url("/services/backend/")
                        .with_order(1),
                ],
            },
            StoredMenu {
                name: "Footer".to_string(),
                slug: MenuSlug::new("footer"),
                items: vec![
                    StoredItem::new(11, "Privacy policy").with_url("/privacy/"),
                    StoredItem::new(12, "Terms of service")
                        .with_url("/terms/")
                        .with_order(1),
                ],
            },
        ],
    }
}
