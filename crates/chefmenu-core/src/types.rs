use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// A number with an optional unit suffix, e.g. `420` or `38g`.
static RE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*([A-Za-z%]{0,8})\s*$").unwrap());

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = String;

    /// Labels are matched case-insensitively so CLI input like `mains` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Unknown course \"{trimmed}\" (expected one of: {})",
                    Course::ALL.map(Course::label).join(", ")
                )
            })
    }
}

/// Course dimension of the filter: either every course or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    pub fn matches(self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(c) => c == course,
        }
    }
}

impl FromStr for CourseFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CourseFilter::All);
        }
        s.parse().map(CourseFilter::Only)
    }
}

impl TryFrom<String> for CourseFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseFilter> for String {
    fn from(value: CourseFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseFilter::All => f.write_str("All"),
            CourseFilter::Only(c) => f.write_str(c.label()),
        }
    }
}

// ---------------------------------------------------------------------------
// Nutrition values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Option<String>,
}

/// One nutrition figure. Numeric input is resolved into a [`Quantity`] once,
/// when the dish is entered; anything else is kept as display text.
///
/// JSON shape: unit-less quantities serialize as a bare number, everything
/// else as a string (`"38g"`, `"trace"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNutritionValue", into = "RawNutritionValue")]
pub enum NutritionValue {
    Quantity(Quantity),
    Text(String),
}

impl NutritionValue {
    pub fn number(amount: f64) -> Self {
        NutritionValue::Quantity(Quantity { amount, unit: None })
    }

    pub fn with_unit(amount: f64, unit: &str) -> Self {
        NutritionValue::Quantity(Quantity {
            amount,
            unit: Some(unit.to_string()),
        })
    }

    /// Resolve free-form input into a quantity when it looks like one.
    /// Digits too large for a finite `f64` stay as text.
    pub fn parse(input: &str) -> Self {
        let quantity = RE_QUANTITY.captures(input).and_then(|caps| {
            let amount = caps[1].parse::<f64>().ok().filter(|a| a.is_finite())?;
            let unit = caps
                .get(2)
                .map(|m| m.as_str())
                .filter(|u| !u.is_empty())
                .map(str::to_string);
            Some(Quantity { amount, unit })
        });
        match quantity {
            Some(q) => NutritionValue::Quantity(q),
            None => NutritionValue::Text(input.trim().to_string()),
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            NutritionValue::Quantity(q) => Some(q.amount),
            NutritionValue::Text(_) => None,
        }
    }
}

impl fmt::Display for NutritionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionValue::Quantity(q) => {
                write!(f, "{}", format_amount(q.amount))?;
                if let Some(ref unit) = q.unit {
                    f.write_str(unit)?;
                }
                Ok(())
            }
            NutritionValue::Text(t) => f.write_str(t),
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawNutritionValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<RawNutritionValue> for NutritionValue {
    fn from(raw: RawNutritionValue) -> Self {
        match raw {
            RawNutritionValue::Integer(n) => NutritionValue::number(n as f64),
            RawNutritionValue::Float(n) => NutritionValue::number(n),
            RawNutritionValue::String(s) => NutritionValue::parse(&s),
        }
    }
}

impl From<NutritionValue> for RawNutritionValue {
    fn from(value: NutritionValue) -> Self {
        match value {
            NutritionValue::Quantity(Quantity { amount, unit: None }) if amount.is_finite() => {
                if amount.fract() == 0.0 && amount.abs() < 1e15 {
                    RawNutritionValue::Integer(amount as i64)
                } else {
                    RawNutritionValue::Float(amount)
                }
            }
            other => RawNutritionValue::String(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: NutritionValue,
    pub protein: NutritionValue,
    pub carbs: NutritionValue,
    pub fat: NutritionValue,
}

impl Default for NutritionalInfo {
    fn default() -> Self {
        Self {
            calories: NutritionValue::number(0.0),
            protein: NutritionValue::with_unit(0.0, "g"),
            carbs: NutritionValue::with_unit(0.0, "g"),
            fat: NutritionValue::with_unit(0.0, "g"),
        }
    }
}

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

/// A dish in the catalog. Field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prep_time: String,
    pub servings: u32,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine_pairing: Option<String>,
}

impl MenuItem {
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens.iter().any(|a| a == allergen)
    }

    /// Strip the id, e.g. to re-validate a loaded record with store rules.
    pub fn to_new_item(&self) -> NewMenuItem {
        NewMenuItem {
            dish_name: self.dish_name.clone(),
            description: self.description.clone(),
            course: self.course,
            price: self.price,
            image: self.image.clone(),
            prep_time: self.prep_time.clone(),
            servings: self.servings,
            allergens: self.allergens.clone(),
            nutritional_info: self.nutritional_info.clone(),
            wine_pairing: self.wine_pairing.clone(),
        }
    }
}

/// A dish that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prep_time: String,
    pub servings: u32,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine_pairing: Option<String>,
}

impl NewMenuItem {
    pub fn with_id(self, id: String) -> MenuItem {
        MenuItem {
            id,
            dish_name: self.dish_name,
            description: self.description,
            course: self.course,
            price: self.price,
            image: self.image,
            prep_time: self.prep_time,
            servings: self.servings,
            allergens: self.allergens,
            nutritional_info: self.nutritional_info,
            wine_pairing: self.wine_pairing,
        }
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Zar,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Zar => "R",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
}

fn default_notifications() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            notifications: default_notifications(),
            dietary_preferences: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Return a copy with `pref` added, or removed if it was already set.
    pub fn toggle_dietary_preference(&self, pref: &str) -> Settings {
        let mut next = self.clone();
        if let Some(pos) = next.dietary_preferences.iter().position(|p| p == pref) {
            next.dietary_preferences.remove(pos);
        } else {
            next.dietary_preferences.push(pref.to_string());
        }
        next
    }

    /// Allergen labels a diner with these preferences should not be shown.
    pub fn implied_allergen_exclusions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for pref in &self.dietary_preferences {
            for allergen in crate::catalogs::allergens_excluded_by(pref) {
                if !out.iter().any(|a| a == allergen) {
                    out.push((*allergen).to_string());
                }
            }
        }
        out
    }
}
