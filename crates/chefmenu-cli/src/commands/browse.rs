use chefmenu_core::{favorites_view, filter, search, summary, CourseFilter, FilterCriteria, MenuItem};

use crate::render::{format_price, item_details, item_rows, plural, settings_text};
use crate::MenuContext;

pub struct FilterArgs {
    pub course: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub exclude: Vec<String>,
    pub diet: bool,
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))
}

fn rows(ctx: &MenuContext, items: &[&MenuItem]) -> Vec<String> {
    let store = ctx.session.store();
    item_rows(
        items.iter().copied(),
        |id| store.is_favorite(id),
        ctx.session.settings().currency,
    )
}

pub fn run_list(ctx: &MenuContext, format: &str) -> Result<String, String> {
    let items = ctx.session.items();
    if format == "json" {
        return to_json(items);
    }

    let mut lines: Vec<String> = Vec::new();
    if let Some(ref name) = ctx.name {
        lines.push(name.clone());
    }
    let all: Vec<&MenuItem> = items.iter().collect();
    lines.extend(rows(ctx, &all));
    let count = items.len();
    lines.push(format!("{count} {}.", plural(count, "dish", "dishes")));
    Ok(lines.join("\n"))
}

pub fn run_show(ctx: &MenuContext, id: &str, format: &str) -> Result<String, String> {
    let item = ctx
        .session
        .store()
        .get(id)
        .ok_or_else(|| format!("No dish with id \"{id}\""))?;
    let favorite = ctx.session.store().is_favorite(id);

    if format == "json" {
        return to_json(&serde_json::json!({
            "item": item,
            "favorite": favorite,
        }));
    }
    Ok(item_details(item, favorite, ctx.session.settings().currency))
}

pub fn run_search(ctx: &MenuContext, query: &str, format: &str) -> Result<String, String> {
    let hits = search(ctx.session.items(), query);
    if format == "json" {
        return to_json(&hits);
    }

    if query.is_empty() {
        return Ok("Start searching: search by dish name, description, or course.".into());
    }
    if hits.is_empty() {
        return Ok(format!("No results found for \"{query}\". Try a different search term."));
    }

    let mut lines = rows(ctx, &hits);
    let count = hits.len();
    lines.push(format!("{count} {} found.", plural(count, "result", "results")));
    Ok(lines.join("\n"))
}

pub fn build_criteria(ctx: &MenuContext, args: &FilterArgs) -> Result<FilterCriteria, String> {
    let course: CourseFilter = args.course.parse()?;
    let defaults = FilterCriteria::default();
    let min_price = args.min_price.unwrap_or(defaults.min_price);
    let max_price = args.max_price.unwrap_or(defaults.max_price);
    if min_price > max_price {
        return Err(format!(
            "Minimum price {min_price} is above maximum price {max_price}"
        ));
    }

    let mut criteria = FilterCriteria {
        course,
        min_price,
        max_price,
        excluded_allergens: Vec::new(),
    }
    .exclude(args.exclude.iter().cloned());
    if args.diet {
        criteria = criteria.exclude(ctx.session.settings().implied_allergen_exclusions());
    }
    Ok(criteria)
}

pub fn run_filter(ctx: &MenuContext, args: &FilterArgs, format: &str) -> Result<String, String> {
    let criteria = build_criteria(ctx, args)?;
    let matched = filter(ctx.session.items(), &criteria);

    if format == "json" {
        return to_json(&serde_json::json!({
            "criteria": criteria,
            "items": matched,
        }));
    }

    let currency = ctx.session.settings().currency;
    let mut lines = vec![format!(
        "Course: {} · Price: {} - {} · Excluding: {}",
        criteria.course,
        format_price(criteria.min_price, currency),
        format_price(criteria.max_price, currency),
        if criteria.excluded_allergens.is_empty() {
            "none".to_string()
        } else {
            criteria.excluded_allergens.join(", ")
        }
    )];
    lines.extend(rows(ctx, &matched));
    let count = matched.len();
    lines.push(format!("{count} {} found.", plural(count, "item", "items")));
    Ok(lines.join("\n"))
}

pub fn run_favorites(ctx: &MenuContext, format: &str) -> Result<String, String> {
    let store = ctx.session.store();
    let favorites = favorites_view(store.list(), store.favorites());
    if format == "json" {
        return to_json(&favorites);
    }

    if favorites.is_empty() {
        return Ok(
            "No favorites yet. Mark dishes with --favorite <ID> or list them in chefmenu.config.yaml."
                .into(),
        );
    }
    let mut lines = rows(ctx, &favorites);
    let count = favorites.len();
    lines.push(format!("{count} saved {}.", plural(count, "item", "items")));
    Ok(lines.join("\n"))
}

pub fn run_stats(ctx: &MenuContext, format: &str) -> Result<String, String> {
    let stats = summary(ctx.session.items());
    let favorite_count = ctx.session.store().favorite_count();

    if format == "json" {
        return to_json(&serde_json::json!({
            "summary": stats,
            "favorites": favorite_count,
            "files": ctx.file_count,
        }));
    }

    let currency = ctx.session.settings().currency;
    let mut lines = Vec::new();
    if let Some(ref name) = ctx.name {
        lines.push(name.clone());
    }
    lines.push(format!("Total dishes: {}", stats.total_dishes));
    lines.push(format!(
        "Avg. price: {}{:.0}",
        currency.symbol(),
        stats.average_price
    ));
    for (course, count) in &stats.by_course {
        lines.push(format!("{course}: {count}"));
    }
    lines.push(format!("Favorites: {favorite_count}"));
    Ok(lines.join("\n"))
}

pub fn run_settings(ctx: &MenuContext, format: &str) -> Result<String, String> {
    let settings = ctx.session.settings();
    if format == "json" {
        return to_json(settings);
    }
    Ok(settings_text(settings))
}
