use std::collections::{BTreeSet, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::catalogs::seed_menu;
use crate::error::CatalogError;
use crate::types::{MenuItem, NewMenuItem};
use crate::validator::{validate_new_item, validate_stored_item};

/// The catalog: menu items in insertion order plus the favorited ids.
///
/// Favorites are not tied to catalog membership. Toggling an unknown id is
/// allowed and removing an item leaves its favorite mark in place; derived
/// views only ever show ids that still exist.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    favorites: BTreeSet<String>,
    last_issued: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in launch menu.
    pub fn seeded() -> Self {
        Self {
            items: seed_menu(),
            ..Self::default()
        }
    }

    /// Build a store from loaded records. Ids must be unique and every record
    /// must satisfy the data model; unlike `add`, a zero price is accepted.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            validate_stored_item(item)?;
        }
        Ok(Self {
            items,
            ..Self::default()
        })
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate, assign a fresh id and append. The store is unchanged on error.
    pub fn add(&mut self, item: NewMenuItem) -> Result<MenuItem, CatalogError> {
        validate_new_item(&item)?;
        let id = self.next_id();
        let stored = item.with_id(id);
        debug!(id = %stored.id, dish = %stored.dish_name, "menu item added");
        self.items.push(stored.clone());
        Ok(stored)
    }

    /// Delete the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id, "menu item removed");
        }
        removed
    }

    /// Flip favorite membership. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        debug!(id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Millisecond timestamp, bumped past the last issued id and any id
    /// already in the catalog.
    fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut candidate = now.max(self.last_issued + 1);
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }
}
