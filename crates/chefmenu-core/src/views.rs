//! Derived views: read-only subsequences of the catalog, recomputed on demand.
//!
//! Every function here preserves catalog order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalogs::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::types::{Course, CourseFilter, MenuItem};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on dish name, description and course.
///
/// An empty query yields no results: the search screen shows a prompt rather
/// than the full list.
pub fn search<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.dish_name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.course.label().to_lowercase().contains(&needle)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub course: CourseFilter,
    pub min_price: f64,
    pub max_price: f64,
    pub excluded_allergens: Vec<String>,
}

impl Default for FilterCriteria {
    /// The "clear all filters" state.
    fn default() -> Self {
        Self {
            course: CourseFilter::All,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            excluded_allergens: Vec::new(),
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.course.matches(item.course)
            && item.price >= self.min_price
            && item.price <= self.max_price
            && !item
                .allergens
                .iter()
                .any(|a| self.excluded_allergens.contains(a))
    }

    /// Add exclusions, skipping labels already present.
    pub fn exclude<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for a in allergens {
            let a = a.into();
            if !self.excluded_allergens.contains(&a) {
                self.excluded_allergens.push(a);
            }
        }
        self
    }
}

/// Items passing the course, price-range and allergen predicates (all AND-ed).
pub fn filter<'a>(items: &'a [MenuItem], criteria: &FilterCriteria) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// Favorited items in catalog order, not in the order they were favorited.
pub fn favorites_view<'a>(
    items: &'a [MenuItem],
    favorite_ids: &BTreeSet<String>,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| favorite_ids.contains(&item.id))
        .collect()
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    pub total_dishes: usize,
    pub average_price: f64,
    pub by_course: BTreeMap<Course, usize>,
}

/// Home screen stats.
pub fn summary(items: &[MenuItem]) -> MenuSummary {
    let total_dishes = items.len();
    let average_price = if total_dishes > 0 {
        items.iter().map(|i| i.price).sum::<f64>() / total_dishes as f64
    } else {
        0.0
    };
    let mut by_course = BTreeMap::new();
    for item in items {
        *by_course.entry(item.course).or_insert(0) += 1;
    }
    MenuSummary {
        total_dishes,
        average_price,
        by_course,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::seed_menu;

    #[test]
    fn search_is_case_insensitive_on_course() {
        let menu = seed_menu();
        let hits = search(&menu, "STARTERS");
        let ids: Vec<&str> = hits.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "10", "11"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let menu = seed_menu();
        let criteria = FilterCriteria {
            min_price: 145.0,
            max_price: 165.0,
            ..Default::default()
        };
        let ids: Vec<&str> = filter(&menu, &criteria)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "6", "12"]);
    }

    #[test]
    fn exclude_deduplicates() {
        let criteria = FilterCriteria::default()
            .exclude(["Fish", "Dairy"])
            .exclude(vec!["Fish".to_string()]);
        assert_eq!(criteria.excluded_allergens, vec!["Fish", "Dairy"]);
    }

    #[test]
    fn summary_of_empty_menu() {
        let s = summary(&[]);
        assert_eq!(s.total_dishes, 0);
        assert_eq!(s.average_price, 0.0);
        assert!(s.by_course.is_empty());
    }
}
