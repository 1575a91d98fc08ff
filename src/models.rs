//! Core data models for Treenav
//!
//! Defines the stored menu-item record and its identifier and sort-key
//! value types. Records are immutable for the duration of one render; the
//! builder turns them into `Node`s without touching the originals' data.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a menu item, unique within one render's record set
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Slug naming one logical menu, e.g. `main` or `footer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuSlug(pub String);

impl MenuSlug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }
}

impl fmt::Display for MenuSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MenuSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

/// Sibling sort key: an integer or a string
///
/// Integer keys sort before string keys; within a variant the natural
/// order applies. Equal keys keep their input order (the builder sorts
/// stably).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderKey {
    Number(i64),
    Text(String),
}

impl Default for OrderKey {
    fn default() -> Self {
        OrderKey::Number(0)
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (OrderKey::Number(a), OrderKey::Number(b)) => a.cmp(b),
            (OrderKey::Text(a), OrderKey::Text(b)) => a.cmp(b),
            (OrderKey::Number(_), OrderKey::Text(_)) => Ordering::Less,
            (OrderKey::Text(_), OrderKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One stored menu item
///
/// `named_route` takes priority over `url` when it resolves. A record
/// whose `parent_id` is absent, or does not resolve within its menu's
/// record set, is a root item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub id: ItemId,
    #[serde(default)]
    pub parent_id: Option<ItemId>,
    pub title: String,
    #[serde(default)]
    pub order: OrderKey,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub named_route: Option<String>,
    /// The menu this record belongs to; the builder itself never filters
    /// by it, records arrive pre-filtered to one menu.
    #[serde(default)]
    pub menu_slug: MenuSlug,
}

impl MenuItemRecord {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            parent_id: None,
            title: title.into(),
            order: OrderKey::default(),
            url: None,
            named_route: None,
            menu_slug: MenuSlug::default(),
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

    pub fn with_order_key(mut self, order: OrderKey) -> Self {
        self.order = order;
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

    pub fn with_menu_slug(mut self, slug: impl Into<MenuSlug>) -> Self {
        self.menu_slug = slug.into();
        self
    }
}

impl From<String> for MenuSlug {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}
