//! JSON-in/JSON-out API for front-end bindings.
//!
//! Every function takes strings and returns a JSON string shaped
//! `{ "success": bool, "data"?: ..., "error"?: string }`.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::MenuItem;
use crate::validator::{validate_draft, MenuItemDraft};
use crate::views::{favorites_view, filter, search, FilterCriteria};

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success_json<T: Serialize>(data: T) -> String {
    serde_json::to_string(&FfiResult {
        success: true,
        data: Some(data),
        error: None,
    })
    .unwrap_or_else(|e| failure_json(format!("JSON serialization error: {e}")))
}

pub fn failure_json(error: impl Into<String>) -> String {
    serde_json::to_string(&FfiResult::<()> {
        success: false,
        data: None,
        error: Some(error.into()),
    })
    .unwrap()
}

fn parse_input<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {what} JSON: {e}"))
}

/// Search a catalog.
///
/// Input: JSON array of menu items, raw query text
/// Output: matching items
pub fn search_to_json(catalog_json: &str, query: &str) -> String {
    match parse_input::<Vec<MenuItem>>(catalog_json, "catalog") {
        Ok(items) => success_json(search(&items, query)),
        Err(e) => failure_json(e),
    }
}

/// Filter a catalog.
///
/// Input: JSON array of menu items, criteria JSON (missing keys take the
/// "clear all filters" defaults)
pub fn filter_to_json(catalog_json: &str, criteria_json: &str) -> String {
    let items = match parse_input::<Vec<MenuItem>>(catalog_json, "catalog") {
        Ok(items) => items,
        Err(e) => return failure_json(e),
    };
    match parse_input::<FilterCriteria>(criteria_json, "criteria") {
        Ok(criteria) => success_json(filter(&items, &criteria)),
        Err(e) => failure_json(e),
    }
}

/// Favorited items in catalog order.
///
/// Input: JSON array of menu items, JSON array of favorite ids
pub fn favorites_to_json(catalog_json: &str, favorite_ids_json: &str) -> String {
    let items = match parse_input::<Vec<MenuItem>>(catalog_json, "catalog") {
        Ok(items) => items,
        Err(e) => return failure_json(e),
    };
    match parse_input::<BTreeSet<String>>(favorite_ids_json, "favorites") {
        Ok(ids) => success_json(favorites_view(&items, &ids)),
        Err(e) => failure_json(e),
    }
}

/// Validate add-form input.
///
/// Output on success: the typed new item (no id yet).
/// Output on failure: `error` holds the summary and `data` the issue list.
pub fn validate_draft_to_json(draft_json: &str) -> String {
    let draft = match parse_input::<MenuItemDraft>(draft_json, "draft") {
        Ok(d) => d,
        Err(e) => return failure_json(e),
    };
    match validate_draft(&draft) {
        Ok(item) => success_json(item),
        Err(errs) => serde_json::to_string(&FfiResult {
            success: false,
            data: Some(&errs.issues),
            error: Some(errs.to_string()),
        })
        .unwrap_or_else(|e| failure_json(format!("JSON serialization error: {e}"))),
    }
}
