use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use chefmenu_core::{MenuItem, Settings};

pub const CONFIG_FILE: &str = "chefmenu.config.yaml";

/// Menu records loaded from one file.
pub struct MenuFile {
    pub path: String,
    pub items: Vec<MenuItem>,
}

/// Project configuration from chefmenu.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct MenuConfig {
    pub name: Option<String>,
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub favorites: Vec<String>,
    pub settings: Option<Settings>,
}

/// Menu files found at a path, plus the project config when one drove the lookup.
pub struct MenuSource {
    pub files: Vec<MenuFile>,
    pub config: Option<MenuConfig>,
}

/// Read menu files from a path (file or directory).
pub fn read_menu_files(input_path: &Path) -> Result<MenuSource, String> {
    if !input_path.exists() {
        return Err(format!("Path does not exist: {}", input_path.display()));
    }

    if input_path.is_file() {
        return Ok(MenuSource {
            files: vec![read_menu_file(input_path)?],
            config: None,
        });
    }

    if input_path.is_dir() {
        if let Some(config) = read_project_config(input_path)? {
            let files = read_from_config(&config, input_path)?;
            return Ok(MenuSource {
                files,
                config: Some(config),
            });
        }

        // Default: scan for *.menu.json / *.menu.yaml / *.menu.yml
        return Ok(MenuSource {
            files: scan_directory(input_path)?,
            config: None,
        });
    }

    Err(format!(
        "Path is neither a file nor a directory: {}",
        input_path.display()
    ))
}

fn read_project_config(dir_path: &Path) -> Result<Option<MenuConfig>, String> {
    let config_path = dir_path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read config: {}", e))?;
    let config = serde_yaml::from_str(&content)
        .map_err(|e| format!("Invalid YAML config: {}", e))?;
    debug!(path = %config_path.display(), "project config read");
    Ok(Some(config))
}

/// Parse menu records, choosing the format by file extension.
pub fn read_menu_file(path: &Path) -> Result<MenuFile, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let items: Vec<MenuItem> = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| format!("Invalid menu JSON in {}: {}", path.display(), e))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .map_err(|e| format!("Invalid menu YAML in {}: {}", path.display(), e))?,
        _ => {
            return Err(format!(
                "Unsupported menu file (expected .json, .yaml or .yml): {}",
                path.display()
            ))
        }
    };

    debug!(path = %path.display(), items = items.len(), "menu file read");

    Ok(MenuFile {
        path: path.to_string_lossy().to_string(),
        items,
    })
}

fn scan_directory(dir_path: &Path) -> Result<Vec<MenuFile>, String> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for suffix in ["menu.json", "menu.yaml", "menu.yml"] {
        let pattern = dir_path.join(format!("**/*.{suffix}"));
        let pattern_str = pattern.to_string_lossy().replace('\\', "/");
        let entries =
            glob::glob(&pattern_str).map_err(|e| format!("Invalid glob pattern: {}", e))?;

        for entry in entries {
            match entry {
                Ok(path) => {
                    if !paths.contains(&path) {
                        paths.push(path);
                    }
                }
                Err(e) => {
                    return Err(format!("Glob error: {}", e));
                }
            }
        }
    }

    paths.sort();

    paths.iter().map(|p| read_menu_file(p)).collect()
}

fn read_from_config(config: &MenuConfig, base_dir: &Path) -> Result<Vec<MenuFile>, String> {
    let source_patterns = match config.sources {
        Some(ref s) if !s.is_empty() => s,
        _ => return scan_directory(base_dir),
    };

    let mut files: Vec<MenuFile> = Vec::new();
    let mut seen: std::collections::HashSet<PathBuf> = std::collections::HashSet::new();

    for pattern in source_patterns {
        let full_pattern = base_dir.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str)
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

        let mut matched: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => {
                    if seen.insert(path.clone()) {
                        matched.push(path);
                    }
                }
                Err(e) => return Err(format!("Glob error: {}", e)),
            }
        }
        matched.sort();

        for path in matched {
            files.push(read_menu_file(&path)?);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../samples")
    }

    #[test]
    fn project_dir_returns_its_config() {
        let source = read_menu_files(&samples().join("project")).unwrap();
        let config = source.config.expect("project config");
        assert_eq!(config.name.as_deref(), Some("Winter Tasting Menu"));
        assert_eq!(config.favorites, vec!["2".to_string(), "10".to_string()]);
        assert_eq!(source.files.len(), 2);
        assert!(source.files[0].path.ends_with("mains.menu.json"));
    }

    #[test]
    fn scanned_dir_has_no_config() {
        let source = read_menu_files(&samples().join("scan")).unwrap();
        assert!(source.config.is_none());
        assert_eq!(source.files.len(), 2);
        assert_eq!(source.files[0].items.len(), 2);
    }

    #[test]
    fn single_file() {
        let source = read_menu_files(&samples().join("menu.json")).unwrap();
        assert!(source.config.is_none());
        assert_eq!(source.files[0].items.len(), 5);
    }
}
