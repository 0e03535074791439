//! chefmenu WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string inputs and return JSON strings shaped
//! `{ success: boolean, data?: ..., error?: string }`.

use chefmenu_core::ffi::{failure_json, success_json};
use chefmenu_core::{
    favorites_to_json, favorites_view, filter, filter_to_json, search, search_to_json, summary,
    validate_draft_to_json, FilterCriteria, MenuItemDraft, NavEvent, Session, Settings,
};
use wasm_bindgen::prelude::*;

/// Search a catalog held by the caller.
///
/// @param catalog_json - JSON array of menu items
/// @param query - search text; empty matches nothing
#[wasm_bindgen(js_name = "search")]
pub fn wasm_search(catalog_json: &str, query: &str) -> String {
    search_to_json(catalog_json, query)
}

/// Filter a catalog held by the caller.
///
/// @param catalog_json - JSON array of menu items
/// @param criteria_json - `{ course?, minPrice?, maxPrice?, excludedAllergens? }`
#[wasm_bindgen(js_name = "filter")]
pub fn wasm_filter(catalog_json: &str, criteria_json: &str) -> String {
    filter_to_json(catalog_json, criteria_json)
}

/// Favorited items of a caller-held catalog, in catalog order.
#[wasm_bindgen(js_name = "favorites")]
pub fn wasm_favorites(catalog_json: &str, favorite_ids_json: &str) -> String {
    favorites_to_json(catalog_json, favorite_ids_json)
}

/// Validate add-form input without storing it.
#[wasm_bindgen(js_name = "validateDraft")]
pub fn wasm_validate_draft(draft_json: &str) -> String {
    validate_draft_to_json(draft_json)
}

/// A stateful catalog session: items, favorites, settings and the
/// current screen, starting from the launch menu.
#[wasm_bindgen]
pub struct MenuSession {
    inner: Session,
}

impl Default for MenuSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MenuSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MenuSession {
        MenuSession {
            inner: Session::new(),
        }
    }

    pub fn list(&self) -> String {
        success_json(self.inner.items())
    }

    pub fn search(&self, query: &str) -> String {
        success_json(search(self.inner.items(), query))
    }

    pub fn filter(&self, criteria_json: &str) -> String {
        match serde_json::from_str::<FilterCriteria>(criteria_json) {
            Ok(criteria) => success_json(filter(self.inner.items(), &criteria)),
            Err(e) => failure_json(format!("Invalid criteria JSON: {e}")),
        }
    }

    pub fn favorites(&self) -> String {
        let store = self.inner.store();
        success_json(favorites_view(store.list(), store.favorites()))
    }

    /// Submit the add form. Returns the stored item with its new id.
    #[wasm_bindgen(js_name = "addItem")]
    pub fn add_item(&mut self, draft_json: &str) -> String {
        let draft = match serde_json::from_str::<MenuItemDraft>(draft_json) {
            Ok(d) => d,
            Err(e) => return failure_json(format!("Invalid draft JSON: {e}")),
        };
        match self.inner.add_item(&draft) {
            Ok(item) => success_json(item),
            Err(e) => failure_json(e.to_string()),
        }
    }

    /// Returns whether anything was removed.
    #[wasm_bindgen(js_name = "removeItem")]
    pub fn remove_item(&mut self, id: &str) -> bool {
        self.inner.remove_item(id)
    }

    /// Returns the new favorite state of `id`.
    #[wasm_bindgen(js_name = "toggleFavorite")]
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.inner.toggle_favorite(id)
    }

    pub fn settings(&self) -> String {
        success_json(self.inner.settings())
    }

    #[wasm_bindgen(js_name = "replaceSettings")]
    pub fn replace_settings(&mut self, settings_json: &str) -> String {
        match serde_json::from_str::<Settings>(settings_json) {
            Ok(settings) => {
                self.inner.replace_settings(settings);
                success_json(self.inner.settings())
            }
            Err(e) => failure_json(format!("Invalid settings JSON: {e}")),
        }
    }

    pub fn summary(&self) -> String {
        success_json(summary(self.inner.items()))
    }

    /// The current screen as `{ screen, id? }`.
    pub fn screen(&self) -> String {
        success_json(self.inner.screen())
    }

    /// Apply a navigation event and return the resulting screen.
    ///
    /// @param event_json - `{ event: "navigate", value: "search" }`, `{ event: "back" }`, ...
    pub fn navigate(&mut self, event_json: &str) -> String {
        match serde_json::from_str::<NavEvent>(event_json) {
            Ok(event) => success_json(self.inner.navigate(event)),
            Err(e) => failure_json(format!("Invalid event JSON: {e}")),
        }
    }

    /// Open the details screen for `id`. Unknown ids fail and leave the
    /// screen unchanged.
    #[wasm_bindgen(js_name = "viewDetails")]
    pub fn view_details(&mut self, id: &str) -> String {
        match self.inner.view_details(id) {
            Some(item) => success_json(item),
            None => failure_json(format!("No dish with id \"{id}\"")),
        }
    }

    /// The dish shown on the details screen, or `data: null` elsewhere.
    #[wasm_bindgen(js_name = "selectedItem")]
    pub fn selected_item(&self) -> String {
        success_json(self.inner.selected_item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn session_add_favorite_remove() {
        let mut session = MenuSession::new();

        let added = parse(&session.add_item(
            r#"{"dishName":"Oysters","description":"Knysna oysters, mignonette","course":"Starters","price":"180","prepTime":"10 min","allergens":["Shellfish"]}"#,
        ));
        assert_eq!(added["success"], true);
        let id = added["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(parse(&session.list())["data"].as_array().unwrap().len(), 15);

        assert!(session.toggle_favorite(&id));
        let favorites = parse(&session.favorites());
        assert_eq!(favorites["data"][0]["dishName"], "Oysters");

        assert!(session.remove_item(&id));
        assert!(!session.remove_item(&id));
        assert_eq!(parse(&session.summary())["data"]["totalDishes"], 14);
    }

    #[test]
    fn session_rejects_invalid_draft() {
        let mut session = MenuSession::new();
        let result = parse(&session.add_item(r#"{"dishName":"Soup"}"#));
        assert_eq!(result["success"], false);
        assert_eq!(result["error"], "Invalid menu item: Please fill in all required fields");
        assert_eq!(parse(&session.list())["data"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn session_settings_round_trip() {
        let mut session = MenuSession::new();
        let result = parse(&session.replace_settings(
            r#"{"currency":"EUR","notifications":false,"dietaryPreferences":["Vegan"],"theme":"dark"}"#,
        ));
        assert_eq!(result["data"]["currency"], "EUR");

        let bad = parse(&session.replace_settings("not json"));
        assert_eq!(bad["success"], false);
        assert_eq!(parse(&session.settings())["data"]["theme"], "dark");
    }

    #[test]
    fn session_drives_navigation() {
        let mut session = MenuSession::new();
        assert_eq!(parse(&session.screen())["data"], serde_json::json!({ "screen": "home" }));

        let opened = parse(&session.view_details("3"));
        assert_eq!(opened["data"]["dishName"], "Chocolate Fondant");
        assert_eq!(
            parse(&session.screen())["data"],
            serde_json::json!({ "screen": "details", "id": "3" })
        );
        assert_eq!(parse(&session.selected_item())["data"]["id"], "3");

        let missing = parse(&session.view_details("404"));
        assert_eq!(missing["success"], false);
        assert_eq!(parse(&session.selected_item())["data"]["id"], "3");

        // deleting the dish on screen goes home
        assert!(session.remove_item("3"));
        assert_eq!(parse(&session.screen())["data"]["screen"], "home");
        assert_eq!(parse(&session.selected_item())["data"], serde_json::Value::Null);

        let moved = parse(&session.navigate(r#"{ "event": "navigate", "value": "search" }"#));
        assert_eq!(moved["data"]["screen"], "search");
        let back = parse(&session.navigate(r#"{ "event": "back" }"#));
        assert_eq!(back["data"]["screen"], "home");

        let bad = parse(&session.navigate(r#"{ "event": "teleport" }"#));
        assert_eq!(bad["success"], false);
    }

    #[test]
    fn stateless_helpers_forward_to_core() {
        let result = parse(&wasm_search("[]", "anything"));
        assert_eq!(result["success"], true);
        assert_eq!(result["data"], serde_json::json!([]));

        let bad = parse(&wasm_filter("{", "{}"));
        assert_eq!(bad["success"], false);
    }
}
