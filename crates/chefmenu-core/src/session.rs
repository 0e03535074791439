//! Session state: the one owner of the catalog, settings and navigation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::store::MenuStore;
use crate::types::{MenuItem, Settings};
use crate::validator::{validate_draft, MenuItemDraft};

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Home,
    Search,
    Favorites,
    Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "id", rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Add,
    Details(String),
    Filter,
    Search,
    Favorites,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "camelCase")]
pub enum NavEvent {
    Navigate(Tab),
    AddNew,
    OpenFilter,
    ViewDetails(String),
    Back,
    Cancel,
    ItemAdded,
    ItemRemoved(String),
}

impl Screen {
    pub fn transition(self, event: NavEvent) -> Screen {
        match (self, event) {
            (_, NavEvent::Navigate(tab)) => match tab {
                Tab::Home => Screen::Home,
                Tab::Search => Screen::Search,
                Tab::Favorites => Screen::Favorites,
                Tab::Settings => Screen::Settings,
            },
            (_, NavEvent::AddNew) => Screen::Add,
            (_, NavEvent::OpenFilter) => Screen::Filter,
            (_, NavEvent::ViewDetails(id)) => Screen::Details(id),
            (_, NavEvent::Back | NavEvent::Cancel | NavEvent::ItemAdded) => Screen::Home,
            (Screen::Details(current), NavEvent::ItemRemoved(removed)) if current == removed => {
                Screen::Home
            }
            (screen, NavEvent::ItemRemoved(_)) => screen,
        }
    }

    /// The tab highlighted in the bottom navigation, if any.
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Screen::Home => Some(Tab::Home),
            Screen::Search => Some(Tab::Search),
            Screen::Favorites => Some(Tab::Favorites),
            Screen::Settings => Some(Tab::Settings),
            Screen::Add | Screen::Details(_) | Screen::Filter => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Session {
    store: MenuStore,
    settings: Settings,
    screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session over the built-in launch menu.
    pub fn new() -> Self {
        Self::with_store(MenuStore::seeded())
    }

    pub fn with_store(store: MenuStore) -> Self {
        Self {
            store,
            settings: Settings::default(),
            screen: Screen::Home,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn items(&self) -> &[MenuItem] {
        self.store.list()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The item on the details screen, if one is selected and still exists.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        match &self.screen {
            Screen::Details(id) => self.store.get(id),
            _ => None,
        }
    }

    pub fn navigate(&mut self, event: NavEvent) -> &Screen {
        let current = std::mem::take(&mut self.screen);
        self.screen = current.transition(event);
        debug!(screen = ?self.screen, "navigated");
        &self.screen
    }

    /// Open the details screen. Unknown ids leave the screen as it is.
    pub fn view_details(&mut self, id: &str) -> Option<&MenuItem> {
        if !self.store.contains(id) {
            return None;
        }
        self.navigate(NavEvent::ViewDetails(id.to_string()));
        self.store.get(id)
    }

    /// Submit the add form. On success the new item is stored and the
    /// session returns home; on failure nothing changes.
    pub fn add_item(&mut self, draft: &MenuItemDraft) -> Result<MenuItem, CatalogError> {
        let new_item = validate_draft(draft)?;
        let stored = self.store.add(new_item)?;
        self.navigate(NavEvent::ItemAdded);
        Ok(stored)
    }

    /// Delete an item, leaving the details screen if it showed that item.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.navigate(NavEvent::ItemRemoved(id.to_string()));
        }
        removed
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.store.toggle_favorite(id)
    }

    pub fn replace_settings(&mut self, settings: Settings) {
        debug!(?settings, "settings replaced");
        self.settings = settings;
    }
}
