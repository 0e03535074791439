use chefmenu_core::{
    favorites_to_json, filter_to_json, search_to_json, seed_menu, validate_draft_to_json,
};
use serde_json::Value;

fn assert_success(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], true, "expected success=true, got: {json}");
    v
}

fn assert_failure(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], false, "expected success=false, got: {json}");
    v
}

fn catalog_json() -> String {
    serde_json::to_string(&seed_menu()).unwrap()
}

fn names(v: &Value) -> Vec<&str> {
    v["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["dishName"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// search_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_search_hits() {
    let v = assert_success(&search_to_json(&catalog_json(), "tartare"));
    assert_eq!(names(&v), vec!["Smoked Salmon Tartare", "Tuna Tartare"]);
}

#[test]
fn ffi_search_empty_query() {
    let v = assert_success(&search_to_json(&catalog_json(), ""));
    assert_eq!(v["data"].as_array().unwrap().len(), 0);
}

#[test]
fn ffi_search_bad_catalog() {
    let v = assert_failure(&search_to_json("{not json", "x"));
    assert!(v["error"].as_str().unwrap().starts_with("Invalid catalog JSON"));
    assert!(v.get("data").is_none());
}

// ---------------------------------------------------------------------------
// filter_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_filter_dessert_without_gluten() {
    let criteria = r#"{ "course": "Dessert", "excludedAllergens": ["Gluten"] }"#;
    let v = assert_success(&filter_to_json(&catalog_json(), criteria));
    assert_eq!(names(&v), vec!["Crème Brûlée"]);
}

#[test]
fn ffi_filter_empty_criteria_object() {
    let v = assert_success(&filter_to_json(&catalog_json(), "{}"));
    assert_eq!(v["data"].as_array().unwrap().len(), 14);
}

#[test]
fn ffi_filter_bad_course() {
    let v = assert_failure(&filter_to_json(&catalog_json(), r#"{ "course": "Soup" }"#));
    assert!(v["error"].as_str().unwrap().contains("Invalid criteria JSON"));
}

// ---------------------------------------------------------------------------
// favorites_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_favorites_in_catalog_order() {
    let v = assert_success(&favorites_to_json(&catalog_json(), r#"["12", "3", "missing"]"#));
    assert_eq!(names(&v), vec!["Chocolate Fondant", "Tiramisu"]);
}

// ---------------------------------------------------------------------------
// validate_draft_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_validate_draft_ok() {
    let draft = r#"{
        "dishName": "Lamb Potjie",
        "description": "Slow-cooked in cast iron",
        "course": "Mains",
        "price": "410",
        "prepTime": "3 hr",
        "protein": "44g"
    }"#;
    let v = assert_success(&validate_draft_to_json(draft));
    assert_eq!(v["data"]["price"], 410.0);
    assert_eq!(v["data"]["nutritionalInfo"]["protein"], "44g");
    assert!(v["data"].get("id").is_none());
}

#[test]
fn ffi_validate_draft_reports_issues() {
    let v = assert_failure(&validate_draft_to_json(r#"{ "dishName": "Soup" }"#));
    assert_eq!(v["error"], "Please fill in all required fields");
    let fields: Vec<&str> = v["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["description", "course", "price", "prepTime"]);
}
