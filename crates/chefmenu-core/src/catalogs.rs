use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::MenuItem;

/// Allergen labels offered by the add form and the filter screen.
pub const COMMON_ALLERGENS: [&str; 7] = [
    "Dairy",
    "Eggs",
    "Fish",
    "Shellfish",
    "Gluten",
    "Nuts",
    "Soy",
];

/// Dietary preferences selectable in settings.
pub const DIETARY_OPTIONS: [&str; 7] = [
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Nut-Free",
    "Halal",
    "Kosher",
];

/// Price slider bounds; also the "clear all filters" range.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Used when a dish is added without an image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1698653223689-24b0bfd5150b?auto=format&fit=crop&w=1080&q=80";

/// Allergens implied by each dietary preference.
/// Halal and Kosher constrain preparation rather than allergens, so they map to nothing.
pub static DIETARY_EXCLUSIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("Vegetarian", &["Fish", "Shellfish"]);
        m.insert("Vegan", &["Dairy", "Eggs", "Fish", "Shellfish"]);
        m.insert("Gluten-Free", &["Gluten"]);
        m.insert("Dairy-Free", &["Dairy"]);
        m.insert("Nut-Free", &["Nuts"]);
        m.insert("Halal", &[]);
        m.insert("Kosher", &[]);
        m
    });

pub fn allergens_excluded_by(preference: &str) -> &'static [&'static str] {
    DIETARY_EXCLUSIONS.get(preference).copied().unwrap_or(&[])
}

static SEED_MENU_JSON: &str = include_str!("../data/seed_menu.json");

/// The chef's launch menu, loaded into every new session.
pub static SEED_MENU: LazyLock<Vec<MenuItem>> =
    LazyLock::new(|| serde_json::from_str(SEED_MENU_JSON).unwrap());

pub fn seed_menu() -> Vec<MenuItem> {
    SEED_MENU.clone()
}
