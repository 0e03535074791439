use chefmenu_core::{Currency, MenuItem, Settings};

pub fn format_price(amount: f64, currency: Currency) -> String {
    format!("{}{:.2}", currency.symbol(), amount)
}

pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// One row of a dish table. Favorites get a trailing `*`.
pub fn item_row(item: &MenuItem, favorite: bool, currency: Currency) -> String {
    format!(
        "{:>14}  {:<28} {:<9} {:>10}{}",
        item.id,
        item.dish_name,
        item.course.label(),
        format_price(item.price, currency),
        if favorite { "  *" } else { "" }
    )
}

pub fn item_rows<'a, I>(items: I, is_favorite: impl Fn(&str) -> bool, currency: Currency) -> Vec<String>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items
        .into_iter()
        .map(|item| item_row(item, is_favorite(item.id.as_str()), currency))
        .collect()
}

/// The details screen as text.
pub fn item_details(item: &MenuItem, favorite: bool, currency: Currency) -> String {
    let mut lines = vec![
        format!(
            "{}{}",
            item.dish_name,
            if favorite { " (favorite)" } else { "" }
        ),
        format!("{} · {}", item.course, format_price(item.price, currency)),
        String::new(),
        item.description.clone(),
        String::new(),
        format!("Prep time: {}", item.prep_time),
        format!("Servings:  {}", item.servings),
    ];

    let allergens = if item.allergens.is_empty() {
        "none".to_string()
    } else {
        item.allergens.join(", ")
    };
    lines.push(format!("Allergens: {allergens}"));

    let n = &item.nutritional_info;
    lines.push(format!(
        "Nutrition: {} cal · protein {} · carbs {} · fat {}",
        n.calories, n.protein, n.carbs, n.fat
    ));

    if let Some(ref wine) = item.wine_pairing {
        lines.push(format!("Wine pairing: {wine}"));
    }
    if let Some(ref image) = item.image {
        lines.push(format!("Image: {image}"));
    }
    lines.push(format!("Id: {}", item.id));

    lines.join("\n")
}

pub fn settings_text(settings: &Settings) -> String {
    let prefs = if settings.dietary_preferences.is_empty() {
        "none".to_string()
    } else {
        settings.dietary_preferences.join(", ")
    };
    let exclusions = settings.implied_allergen_exclusions();
    let excluded = if exclusions.is_empty() {
        "none".to_string()
    } else {
        exclusions.join(", ")
    };
    let theme = match settings.theme {
        chefmenu_core::Theme::Light => "light",
        chefmenu_core::Theme::Dark => "dark",
    };

    [
        format!(
            "Currency: {} ({})",
            settings.currency.code(),
            settings.currency.symbol()
        ),
        format!(
            "Notifications: {}",
            if settings.notifications { "on" } else { "off" }
        ),
        format!("Dietary preferences: {prefs}"),
        format!("Excluded allergens: {excluded}"),
        format!("Theme: {theme}"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_currency_symbol() {
        assert_eq!(format_price(385.0, Currency::Zar), "R385.00");
        assert_eq!(format_price(12.5, Currency::Gbp), "£12.50");
    }

    #[test]
    fn details_include_optional_lines() {
        let item = chefmenu_core::seed_menu().remove(2);
        let text = item_details(&item, true, Currency::Zar);
        assert!(text.starts_with("Chocolate Fondant (favorite)"));
        assert!(text.contains("Dessert · R165.00"));
        assert!(text.contains("Nutrition: 485 cal · protein 8g"));
        assert!(text.contains("Wine pairing: Port or Late Harvest Dessert Wine"));
    }
}
