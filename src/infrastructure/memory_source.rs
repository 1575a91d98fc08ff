//! In-memory menu source
//!
//! Backs tests and embedders that already hold the record set. Counts
//! retrievals so callers can pin the one-retrieval-per-render contract.

use std::cell::Cell;

use anyhow::Result;

use crate::domain::ports::MenuSource;
use crate::models::{MenuItemRecord, MenuSlug};

#[derive(Debug, Default)]
pub struct InMemoryMenuSource {
    records: Vec<MenuItemRecord>,
    retrievals: Cell<usize>,
}

impl InMemoryMenuSource {
    pub fn new(records: Vec<MenuItemRecord>) -> Self {
        Self {
            records,
            retrievals: Cell::new(0),
        }
    }

    /// Number of `menu_items` calls made so far
    pub fn retrievals(&self) -> usize {
        self.retrievals.get()
    }
}

impl MenuSource for InMemoryMenuSource {
    fn menu_items(&self, slug: &MenuSlug) -> Result<Vec<MenuItemRecord>> {
        self.retrievals.set(self.retrievals.get() + 1);
        Ok(self
            .records
            .iter()
            .filter(|record| &record.menu_slug == slug)
            .cloned()
            .collect())
    }
}
