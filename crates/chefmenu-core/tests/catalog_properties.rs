use std::collections::BTreeSet;

use chefmenu_core::*;
use pretty_assertions::assert_eq;

fn ids<'a>(items: &[&'a MenuItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

fn sample_new_item() -> NewMenuItem {
    NewMenuItem {
        dish_name: "Bobotie Spring Rolls".into(),
        description: "Cape Malay spiced mince in crisp pastry".into(),
        course: Course::Starters,
        price: 145.0,
        image: None,
        prep_time: "25 min".into(),
        servings: 4,
        allergens: vec!["Gluten".into(), "Eggs".into()],
        nutritional_info: NutritionalInfo::default(),
        wine_pairing: Some("Chenin Blanc".into()),
    }
}

// ---------------------------------------------------------------------------
// Catalog store
// ---------------------------------------------------------------------------

#[test]
fn add_appends_with_fresh_id() {
    let mut store = MenuStore::seeded();
    let before: Vec<String> = store.list().iter().map(|i| i.id.clone()).collect();

    let added = store.add(sample_new_item()).unwrap();

    assert_eq!(store.len(), before.len() + 1);
    assert!(!before.contains(&added.id));
    assert_eq!(store.list().last(), Some(&added));
    assert_eq!(added.dish_name, "Bobotie Spring Rolls");
}

#[test]
fn repeated_adds_keep_ids_unique() {
    let mut store = MenuStore::seeded();
    for _ in 0..50 {
        store.add(sample_new_item()).unwrap();
    }
    let unique: BTreeSet<&str> = store.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(unique.len(), 64);
}

#[test]
fn store_rejects_invalid_records() {
    let mut store = MenuStore::seeded();
    let bad = NewMenuItem {
        dish_name: "".into(),
        price: -1.0,
        ..sample_new_item()
    };
    let err = store.add(bad).unwrap_err();
    match err {
        CatalogError::Invalid(errs) => {
            assert!(errs.has_field("dishName"));
            assert!(errs.has_field("price"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.len(), 14);
}

#[test]
fn remove_deletes_and_absent_is_noop() {
    let mut store = MenuStore::seeded();
    assert!(store.remove("4"));
    assert!(store.get("4").is_none());
    assert_eq!(store.len(), 13);

    let snapshot = store.list().to_vec();
    assert!(!store.remove("4"));
    assert!(!store.remove("does-not-exist"));
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn toggle_favorite_twice_restores_membership() {
    let mut store = MenuStore::seeded();
    store.toggle_favorite("2");
    let before = store.favorites().clone();

    store.toggle_favorite("9");
    store.toggle_favorite("9");
    assert_eq!(store.favorites(), &before);

    store.toggle_favorite("2");
    store.toggle_favorite("2");
    assert_eq!(store.favorites(), &before);
}

#[test]
fn toggle_favorite_accepts_unknown_ids() {
    let mut store = MenuStore::seeded();
    assert!(store.toggle_favorite("ghost"));
    assert_eq!(store.favorite_count(), 1);
    assert!(favorites_view(store.list(), store.favorites()).is_empty());
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

#[test]
fn filter_mains_preserves_order() {
    let menu = seed_menu();
    let criteria = FilterCriteria {
        course: CourseFilter::Only(Course::Mains),
        min_price: 0.0,
        max_price: 1000.0,
        excluded_allergens: vec![],
    };
    let result = filter(&menu, &criteria);
    let expected: Vec<&MenuItem> = menu.iter().filter(|i| i.course == Course::Mains).collect();
    assert_eq!(result, expected);
    assert_eq!(ids(&result), vec!["1", "2", "4", "5", "8", "9", "13", "14"]);
}

#[test]
fn filter_excludes_allergens() {
    let catalog = vec![MenuItem {
        id: "1".into(),
        dish_name: "Kingklip".into(),
        description: "Line fish".into(),
        course: Course::Mains,
        price: 385.0,
        image: None,
        prep_time: "35 min".into(),
        servings: 1,
        allergens: vec!["Fish".into(), "Dairy".into()],
        nutritional_info: NutritionalInfo::default(),
        wine_pairing: None,
    }];
    let criteria = FilterCriteria::default().exclude(["Fish"]);
    assert!(filter(&catalog, &criteria).is_empty());

    let criteria = FilterCriteria::default().exclude(["Nuts"]);
    assert_eq!(filter(&catalog, &criteria).len(), 1);
}

#[test]
fn filter_combines_all_predicates() {
    let menu = seed_menu();
    let criteria = FilterCriteria {
        course: CourseFilter::Only(Course::Starters),
        min_price: 200.0,
        max_price: 280.0,
        excluded_allergens: vec!["Soy".into()],
    };
    assert_eq!(ids(&filter(&menu, &criteria)), vec!["7"]);
}

#[test]
fn default_filter_keeps_everything_in_range() {
    let menu = seed_menu();
    assert_eq!(filter(&menu, &FilterCriteria::default()).len(), 14);
}

#[test]
fn empty_search_returns_nothing() {
    let menu = seed_menu();
    assert!(search(&menu, "").is_empty());
}

#[test]
fn search_finds_chocolate_fondant() {
    let menu = seed_menu();
    let hits = search(&menu, "chocolate");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].dish_name, "Chocolate Fondant");
    assert_eq!(hits[0].course, Course::Dessert);
}

#[test]
fn search_matches_description() {
    let menu = seed_menu();
    assert_eq!(ids(&search(&menu, "TRUFFLE")), vec!["2", "8", "14"]);
}

#[test]
fn favorites_view_uses_catalog_order() {
    let menu = seed_menu();
    let one: BTreeSet<String> = ["3".to_string()].into();
    let view = favorites_view(&menu, &one);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "3");

    let mut store = MenuStore::seeded();
    store.toggle_favorite("12");
    store.toggle_favorite("1");
    store.toggle_favorite("7");
    assert_eq!(
        ids(&favorites_view(store.list(), store.favorites())),
        vec!["1", "7", "12"]
    );
}

#[test]
fn summary_matches_home_screen_stats() {
    let s = summary(&seed_menu());
    assert_eq!(s.total_dishes, 14);
    assert!((s.average_price - 5555.0 / 14.0).abs() < 1e-9);
    assert_eq!(s.by_course.get(&Course::Mains), Some(&8));
    assert_eq!(s.by_course.get(&Course::Starters), Some(&3));
    assert_eq!(s.by_course.get(&Course::Dessert), Some(&3));
}

#[test]
fn dietary_preferences_drive_filter_exclusions() {
    let settings = Settings {
        dietary_preferences: vec!["Vegetarian".into(), "Gluten-Free".into()],
        ..Settings::default()
    };
    let criteria = FilterCriteria::default().exclude(settings.implied_allergen_exclusions());
    let menu = seed_menu();
    assert_eq!(ids(&filter(&menu, &criteria)), vec!["2", "6", "9", "13"]);
}
