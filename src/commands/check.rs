//! Check command handler
//!
//! Builds every menu in the file and reports structural problems without
//! rendering anything. Exit code 1 when any menu fails to build.

use std::path::PathBuf;

use anyhow::Result;

use treenav::config::{Config, CONFIG_FILE_NAME};
use treenav::domain::services::tree_builder;
use treenav::domain::services::url_policy::{effective_url, PLACEHOLDER_HREF};
use treenav::infrastructure::{StaticRouteTable, TomlMenuStore};

use crate::ui;

pub fn cmd_check(menus: Option<PathBuf>, json: bool) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let config = load_config(&project_root, json)?;

    let menus_path = menus.unwrap_or_else(|| config.menus.path.clone());
    let store = TomlMenuStore::new(&menus_path);
    let routes = StaticRouteTable::new(config.routes.clone());

    let document = store.document()?;

    let mut failures = 0usize;
    let mut reports: Vec<serde_json::Value> = Vec::new();

    for menu in document.menus {
        let slug = menu.slug.clone();
        match tree_builder::build(menu.records()) {
            Ok(build) => {
                let unroutable = build
                    .forest
                    .preorder()
                    .filter(|&id| {
                        effective_url(&build.forest.node(id).record, &routes)
                            == PLACEHOLDER_HREF
                    })
                    .count();

                if json {
                    reports.push(serde_json::json!({
                        "slug": slug,
                        "status": "ok",
                        "items": build.forest.len(),
                        "warnings": build.warnings,
                        "unroutable_items": unroutable,
                    }));
                } else {
                    ui::print_success(&format!("{slug}: {} item(s)", build.forest.len()));
                    for warning in &build.warnings {
                        ui::print_warning(warning);
                    }
                    if unroutable > 0 {
                        ui::print_warning(&format!(
                            "{slug}: {unroutable} item(s) resolve to the '{PLACEHOLDER_HREF}' placeholder"
                        ));
                    }
                }
            }
            Err(err) => {
                failures += 1;
                if json {
                    reports.push(serde_json::json!({
                        "slug": slug,
                        "status": "error",
                        "error": err.to_string(),
                    }));
                } else {
                    ui::print_failure(&format!("{slug}: {err}"));
                }
            }
        }
    }

    if json {
        let out = serde_json::json!({
            "event": "data",
            "command": "check",
            "menus_file": menus_path,
            "failures": failures,
            "menus": reports,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    }

    if failures > 0 {
        anyhow::bail!("{failures} menu(s) failed validation");
    }
    Ok(())
}

/// Load the project config, surfacing unknown-key warnings; a config file
/// that fails to parse fails the check.
fn load_config(project_root: &std::path::Path, json: bool) -> Result<Config> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default().with_env_overrides());
    }

    let (config, warnings) = Config::load_with_warnings(&config_path)?;
    if !json {
        ui::print_config_warnings(&config_path, &warnings);
    }
    Ok(config.with_env_overrides())
}
