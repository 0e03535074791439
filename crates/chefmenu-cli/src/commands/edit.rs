use std::fs;
use std::path::Path;

use chefmenu_core::MenuItemDraft;

use crate::MenuContext;

fn read_draft(path: &Path) -> Result<MenuItemDraft, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    // YAML is a superset of JSON, so one parser covers both draft formats
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Invalid draft in {}: {}", path.display(), e))
}

fn write_catalog(ctx: &MenuContext, out_path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(ctx.session.items())
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    fs::write(out_path, &json).map_err(|e| format!("Failed to write {}: {e}", out_path.display()))
}

pub fn run_add(
    ctx: &mut MenuContext,
    draft_path: &Path,
    output_file: Option<&Path>,
    format: &str,
) -> Result<String, String> {
    let draft = read_draft(draft_path)?;
    let added = ctx.session.add_item(&draft).map_err(|e| e.to_string())?;

    if let Some(out_path) = output_file {
        write_catalog(ctx, out_path)?;
    }

    if format == "json" {
        return serde_json::to_string_pretty(&added)
            .map_err(|e| format!("JSON serialization error: {e}"));
    }

    let mut lines = vec![format!(
        "Added \"{}\" ({}) with id {}.",
        added.dish_name, added.course, added.id
    )];
    if let Some(out_path) = output_file {
        lines.push(format!(
            "Written {} dishes to {}",
            ctx.session.items().len(),
            out_path.display()
        ));
    }
    Ok(lines.join("\n"))
}

pub fn run_remove(
    ctx: &mut MenuContext,
    id: &str,
    output_file: Option<&Path>,
    format: &str,
) -> Result<String, String> {
    let removed = ctx.session.remove_item(id);

    if let Some(out_path) = output_file {
        write_catalog(ctx, out_path)?;
    }

    if format == "json" {
        return serde_json::to_string_pretty(&serde_json::json!({
            "id": id,
            "removed": removed,
            "remaining": ctx.session.items().len(),
        }))
        .map_err(|e| format!("JSON serialization error: {e}"));
    }

    let mut lines = vec![if removed {
        format!("Removed dish {id}.")
    } else {
        format!("No dish with id {id}; catalog unchanged.")
    }];
    if let Some(out_path) = output_file {
        lines.push(format!(
            "Written {} dishes to {}",
            ctx.session.items().len(),
            out_path.display()
        ));
    }
    Ok(lines.join("\n"))
}
