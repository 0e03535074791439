use std::path::Path;

use chefmenu_core::{validate_items, Diagnostic, DiagnosticSeverity};

use crate::load_catalog;
use crate::render::plural;

pub fn run_validate(catalog: Option<&Path>, format: &str) -> Result<(String, usize), String> {
    let loaded = load_catalog(catalog)?;
    let report = validate_items(&loaded.items);

    let error_count = report.errors.len();
    let warning_count = report.warnings.len();
    let dish_count = loaded.items.len();

    if format == "json" {
        let diagnostics: Vec<&Diagnostic> =
            report.errors.iter().chain(report.warnings.iter()).collect();
        let output = serde_json::json!({
            "diagnostics": diagnostics,
            "summary": {
                "errors": error_count,
                "warnings": warning_count,
                "dishes": dish_count,
                "files": loaded.file_count,
            }
        });
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        return Ok((json, error_count));
    }

    // Human-readable format
    let mut lines: Vec<String> = Vec::new();

    for d in report.errors.iter().chain(report.warnings.iter()) {
        let severity = match d.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        lines.push(format!(
            "{} {}[{}]: {}",
            d.item_id, severity, d.code, d.message
        ));
    }

    lines.push(format!(
        "{error_count} {}, {warning_count} {} in {dish_count} {}.",
        plural(error_count, "error", "errors"),
        plural(warning_count, "warning", "warnings"),
        plural(dish_count, "dish", "dishes"),
    ));

    Ok((lines.join("\n"), error_count))
}
