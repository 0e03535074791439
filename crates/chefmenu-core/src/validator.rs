use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::catalogs::{COMMON_ALLERGENS, DEFAULT_IMAGE_URL};
use crate::types::*;

pub const MSG_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_INVALID_PRICE: &str = "Please enter a valid price";

// ---------------------------------------------------------------------------
// Blocking validation errors (add form / store boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// camelCase name of the offending field.
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{}", join_messages(.issues))]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for issue in issues {
        if !seen.contains(&issue.message.as_str()) {
            seen.push(&issue.message);
        }
    }
    seen.join("; ")
}

fn issue(field: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Draft: raw add-form input
// ---------------------------------------------------------------------------

/// Everything the add form collects, before any parsing.
///
/// Numeric fields accept either numbers or strings so YAML and JSON drafts
/// can write `price: 385` as well as `price: "385"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItemDraft {
    pub dish_name: String,
    pub description: String,
    pub course: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    pub image_url: String,
    pub prep_time: String,
    #[serde(deserialize_with = "text_or_number")]
    pub servings: String,
    #[serde(deserialize_with = "text_or_number")]
    pub calories: String,
    #[serde(deserialize_with = "text_or_number")]
    pub protein: String,
    #[serde(deserialize_with = "text_or_number")]
    pub carbs: String,
    #[serde(deserialize_with = "text_or_number")]
    pub fat: String,
    pub wine_pairing: String,
    pub allergens: Vec<String>,
}

impl MenuItemDraft {
    /// Flip an allergen chip on or off, as the form does.
    pub fn toggle_allergen(&mut self, allergen: &str) {
        if let Some(pos) = self.allergens.iter().position(|a| a == allergen) {
            self.allergens.remove(pos);
        } else {
            self.allergens.push(allergen.to_string());
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
    })
}

/// Turn form input into a typed record, or report every blocking problem.
pub fn validate_draft(draft: &MenuItemDraft) -> Result<NewMenuItem, ValidationErrors> {
    let mut issues = Vec::new();

    let required = [
        ("dishName", &draft.dish_name),
        ("description", &draft.description),
        ("course", &draft.course),
        ("price", &draft.price),
        ("prepTime", &draft.prep_time),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(issue(field, MSG_REQUIRED));
        }
    }

    let course = if draft.course.trim().is_empty() {
        None
    } else {
        match draft.course.parse::<Course>() {
            Ok(c) => Some(c),
            Err(e) => {
                issues.push(issue("course", &e));
                None
            }
        }
    };

    let price = if draft.price.trim().is_empty() {
        None
    } else {
        match draft.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => Some(p),
            _ => {
                issues.push(issue("price", MSG_INVALID_PRICE));
                None
            }
        }
    };

    let (Some(course), Some(price), true) = (course, price, issues.is_empty()) else {
        return Err(ValidationErrors { issues });
    };

    let servings = draft
        .servings
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(1);

    let image = match draft.image_url.trim() {
        "" => DEFAULT_IMAGE_URL.to_string(),
        url => url.to_string(),
    };

    let wine_pairing = Some(draft.wine_pairing.trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string);

    let defaults = NutritionalInfo::default();
    let nutrition = |input: &str, fallback: NutritionValue| {
        if input.trim().is_empty() {
            fallback
        } else {
            NutritionValue::parse(input)
        }
    };

    let mut allergens: Vec<String> = Vec::new();
    for a in &draft.allergens {
        let a = a.trim();
        if !a.is_empty() && !allergens.iter().any(|x| x == a) {
            allergens.push(a.to_string());
        }
    }

    Ok(NewMenuItem {
        dish_name: draft.dish_name.trim().to_string(),
        description: draft.description.trim().to_string(),
        course,
        price,
        image: Some(image),
        prep_time: draft.prep_time.trim().to_string(),
        servings,
        allergens,
        nutritional_info: NutritionalInfo {
            calories: nutrition(&draft.calories, defaults.calories),
            protein: nutrition(&draft.protein, defaults.protein),
            carbs: nutrition(&draft.carbs, defaults.carbs),
            fat: nutrition(&draft.fat, defaults.fat),
        },
        wine_pairing,
    })
}

/// Rules `add` enforces on a new record: the add-form rules, so a new dish
/// always has a positive price.
pub fn validate_new_item(item: &NewMenuItem) -> Result<(), ValidationErrors> {
    let mut issues = record_issues(
        &item.dish_name,
        &item.description,
        &item.prep_time,
        item.servings,
    );
    if !item.price.is_finite() || item.price <= 0.0 {
        issues.push(issue("price", MSG_INVALID_PRICE));
    }
    into_result(issues)
}

/// Data-model rules for a record that already has an id. Prices may be zero
/// here (complimentary dishes); only negative or non-finite prices fail.
pub fn validate_stored_item(item: &MenuItem) -> Result<(), ValidationErrors> {
    let mut issues = record_issues(
        &item.dish_name,
        &item.description,
        &item.prep_time,
        item.servings,
    );
    if !item.price.is_finite() || item.price < 0.0 {
        issues.push(issue("price", MSG_INVALID_PRICE));
    }
    into_result(issues)
}

fn record_issues(
    dish_name: &str,
    description: &str,
    prep_time: &str,
    servings: u32,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (field, value) in [
        ("dishName", dish_name),
        ("description", description),
        ("prepTime", prep_time),
    ] {
        if value.trim().is_empty() {
            issues.push(issue(field, MSG_REQUIRED));
        }
    }
    if servings == 0 {
        issues.push(issue("servings", "Servings must be at least 1"));
    }
    issues
}

fn into_result(issues: Vec<ValidationIssue>) -> Result<(), ValidationErrors> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { issues })
    }
}

// ---------------------------------------------------------------------------
// Catalog diagnostics (loaded menus)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: String,
    pub severity: DiagnosticSeverity,
    pub item_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogReport {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Check loaded records against the data-model rules plus catalog-wide invariants.
///
/// Codes:
/// - `MENU-E001` missing required text
/// - `MENU-E002` price negative or not a number
/// - `MENU-E003` duplicate id
/// - `MENU-E004` zero servings
/// - `MENU-W001` allergen label outside the common set
/// - `MENU-W002` allergen listed twice
pub fn validate_items(items: &[MenuItem]) -> CatalogReport {
    let mut report = CatalogReport::default();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for item in items {
        if !seen_ids.insert(item.id.as_str()) {
            report.errors.push(Diagnostic {
                code: "MENU-E003".into(),
                severity: DiagnosticSeverity::Error,
                item_id: item.id.clone(),
                message: format!("Duplicate menu item id \"{}\"", item.id),
            });
        }

        if let Err(errs) = validate_stored_item(item) {
            for i in errs.issues {
                let code = match i.field.as_str() {
                    "price" => "MENU-E002",
                    "servings" => "MENU-E004",
                    _ => "MENU-E001",
                };
                let message = match code {
                    "MENU-E001" => format!("Dish \"{}\" is missing {}", item.dish_name, i.field),
                    "MENU-E002" => format!(
                        "Dish \"{}\" has invalid price {}",
                        item.dish_name, item.price
                    ),
                    _ => format!("Dish \"{}\": {}", item.dish_name, i.message),
                };
                report.errors.push(Diagnostic {
                    code: code.into(),
                    severity: DiagnosticSeverity::Error,
                    item_id: item.id.clone(),
                    message,
                });
            }
        }

        let mut seen_allergens: HashSet<&str> = HashSet::new();
        for allergen in &item.allergens {
            if !seen_allergens.insert(allergen.as_str()) {
                report.warnings.push(Diagnostic {
                    code: "MENU-W002".into(),
                    severity: DiagnosticSeverity::Warning,
                    item_id: item.id.clone(),
                    message: format!(
                        "Dish \"{}\" lists allergen \"{}\" more than once",
                        item.dish_name, allergen
                    ),
                });
            } else if !COMMON_ALLERGENS.contains(&allergen.as_str()) {
                report.warnings.push(Diagnostic {
                    code: "MENU-W001".into(),
                    severity: DiagnosticSeverity::Warning,
                    item_id: item.id.clone(),
                    message: format!(
                        "Dish \"{}\" uses allergen \"{}\" which the filter screen does not offer",
                        item.dish_name, allergen
                    ),
                });
            }
        }
    }

    report
}
