//! MenuSource port - abstraction for menu-item retrieval
//!
//! One render performs exactly one `menu_items` call. That makes the
//! "one retrieval per render" requirement a structural guarantee of the
//! interface: the implementation must hand back the complete flat record
//! set for the menu in that single call.

use anyhow::Result;

use crate::models::{MenuItemRecord, MenuSlug};

/// Abstract source of stored menu items
pub trait MenuSource {
    /// Load the complete flat record set for one menu
    ///
    /// An unknown slug yields an empty set, not an error.
    fn menu_items(&self, slug: &MenuSlug) -> Result<Vec<MenuItemRecord>>;
}
