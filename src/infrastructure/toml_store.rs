//! TOML-backed menu store
//!
//! `menus.toml` holds every menu as a `[[menu]]` table with nested
//! `[[menu.item]]` entries. The whole document is read in one pass and
//! the `MenuSource` impl filters to the requested slug in memory, so a
//! render still costs exactly one retrieval.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ports::MenuSource;
use crate::models::{ItemId, MenuItemRecord, MenuSlug, OrderKey};

/// Top-level shape of a menus.toml document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenusDocument {
    #[serde(default, rename = "menu")]
    pub menus: Vec<StoredMenu>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMenu {
    pub name: String,
    pub slug: MenuSlug,
    #[serde(default, rename = "item")]
    pub items: Vec<StoredItem>,
}

impl StoredMenu {
    /// Flatten into builder-ready records stamped with this menu's slug.
    pub fn records(self) -> Vec<MenuItemRecord> {
        let slug = self.slug;
        self.items
            .into_iter()
            .map(|item| item.into_record(&slug))
            .collect()
    }
}

/// One stored item; the owning menu's slug is stamped on at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
    pub title: String,
    #[serde(default)]
    pub order: OrderKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_route: Option<String>,
}

impl StoredItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            parent_id: None,
            title: title.into(),
            order: OrderKey::default(),
            url: None,
            named_route: None,
        }
    }

    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent_id = Some(ItemId(parent));
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = OrderKey::Number(order);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_named_route(mut self, name: impl Into<String>) -> Self {
        self.named_route = Some(name.into());
        self
    }

    fn into_record(self, slug: &MenuSlug) -> MenuItemRecord {
        MenuItemRecord {
            id: self.id,
            parent_id: self.parent_id,
            title: self.title,
            order: self.order,
            url: self.url,
            named_route: self.named_route,
            menu_slug: slug.clone(),
        }
    }
}

/// Menu storage backed by a single TOML file
pub struct TomlMenuStore {
    path: PathBuf,
}

impl TomlMenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole menus document.
    pub fn document(&self) -> Result<MenusDocument> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading menus file {}", self.path.display()))?;
        let document = toml::from_str(&content)
            .with_context(|| format!("parsing menus file {}", self.path.display()))?;
        Ok(document)
    }
}

impl MenuSource for TomlMenuStore {
    fn menu_items(&self, slug: &MenuSlug) -> Result<Vec<MenuItemRecord>> {
        let document = self.document()?;
        Ok(document
            .menus
            .into_iter()
            .filter(|menu| &menu.slug == slug)
            .flat_map(StoredMenu::records)
            .collect())
    }
}
