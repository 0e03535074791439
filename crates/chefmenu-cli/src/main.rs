mod commands;
mod reader;
mod render;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use chefmenu_core::{seed_menu, MenuItem, MenuStore, Session, Settings};
use reader::{read_menu_files, MenuConfig, MenuSource};

#[derive(Parser)]
#[command(
    name = "chefmenu",
    version,
    about = "Private-dining menu catalog: browse, search, filter and edit dishes"
)]
struct Cli {
    /// Menu file (.json, .yaml, .yml) or project directory; defaults to the built-in launch menu
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Mark a dish as favorite for this run (repeatable)
    #[arg(long = "favorite", value_name = "ID", global = true)]
    favorites: Vec<String>,

    /// Output format: human (default) or json
    #[arg(long, global = true, default_value = "human")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every dish in catalog order
    List,

    /// Show one dish in full
    Show {
        /// Dish id
        id: String,
    },

    /// Case-insensitive search over dish name, description and course
    Search {
        /// Search text; an empty query matches nothing
        #[arg(default_value = "")]
        query: String,
    },

    /// Filter by course, price range and excluded allergens
    Filter {
        /// Course: All (default), Starters, Mains or Dessert
        #[arg(long, default_value = "All")]
        course: String,

        /// Lowest price to include
        #[arg(long)]
        min_price: Option<f64>,

        /// Highest price to include
        #[arg(long)]
        max_price: Option<f64>,

        /// Allergen to exclude (repeatable)
        #[arg(long = "exclude", value_name = "ALLERGEN")]
        exclude: Vec<String>,

        /// Also exclude allergens implied by the configured dietary preferences
        #[arg(long)]
        diet: bool,
    },

    /// List favorited dishes
    Favorites,

    /// Summary stats: dish count, average price, dishes per course
    Stats,

    /// Validate a new-dish draft file and append it
    Add {
        /// Draft file (YAML or JSON) with the add-form fields
        draft: PathBuf,

        /// Write the resulting catalog as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a dish by id
    Remove {
        /// Dish id
        id: String,

        /// Write the resulting catalog as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every loaded dish against the catalog rules
    Validate,

    /// Show the effective settings
    Settings,
}

/// A loaded catalog plus the project metadata that came with it.
pub struct MenuContext {
    pub session: Session,
    pub name: Option<String>,
    pub file_count: usize,
}

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = cli.catalog.as_deref();
    let format = cli.format.as_str();
    let load = || build_context(catalog, &cli.favorites);

    // (output, whether to exit non-zero)
    let result: Result<(String, bool), String> = match cli.command {
        Commands::List => load()
            .and_then(|ctx| commands::browse::run_list(&ctx, format))
            .map(passed),
        Commands::Show { id } => load()
            .and_then(|ctx| commands::browse::run_show(&ctx, &id, format))
            .map(passed),
        Commands::Search { query } => load()
            .and_then(|ctx| commands::browse::run_search(&ctx, &query, format))
            .map(passed),
        Commands::Filter {
            course,
            min_price,
            max_price,
            exclude,
            diet,
        } => {
            let args = commands::browse::FilterArgs {
                course,
                min_price,
                max_price,
                exclude,
                diet,
            };
            load()
                .and_then(|ctx| commands::browse::run_filter(&ctx, &args, format))
                .map(passed)
        }
        Commands::Favorites => load()
            .and_then(|ctx| commands::browse::run_favorites(&ctx, format))
            .map(passed),
        Commands::Stats => load()
            .and_then(|ctx| commands::browse::run_stats(&ctx, format))
            .map(passed),
        Commands::Add { draft, output } => load()
            .and_then(|mut ctx| {
                commands::edit::run_add(&mut ctx, &draft, output.as_deref(), format)
            })
            .map(passed),
        Commands::Remove { id, output } => load()
            .and_then(|mut ctx| {
                commands::edit::run_remove(&mut ctx, &id, output.as_deref(), format)
            })
            .map(passed),
        Commands::Validate => commands::validate::run_validate(catalog, format)
            .map(|(output, error_count)| (output, error_count > 0)),
        Commands::Settings => load()
            .and_then(|ctx| commands::browse::run_settings(&ctx, format))
            .map(passed),
    };

    match result {
        Ok((output, failed)) => {
            println!("{output}");
            if failed {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn passed(output: String) -> (String, bool) {
    (output, false)
}

/// Menu records before any store invariants are applied.
pub struct LoadedCatalog {
    pub items: Vec<MenuItem>,
    pub file_count: usize,
    pub config: Option<MenuConfig>,
}

pub fn load_catalog(catalog: Option<&Path>) -> Result<LoadedCatalog, String> {
    let Some(input_path) = catalog else {
        return Ok(LoadedCatalog {
            items: seed_menu(),
            file_count: 0,
            config: None,
        });
    };

    let MenuSource { files, config } = read_menu_files(input_path)?;

    if files.is_empty() {
        return Err(format!(
            "No menu files (.menu.json, .menu.yaml, .menu.yml) found at: {}",
            input_path.display()
        ));
    }

    let file_count = files.len();
    let mut items = Vec::new();
    for file in files {
        debug!(path = %file.path, items = file.items.len(), "merging menu file");
        items.extend(file.items);
    }
    info!(files = file_count, items = items.len(), "catalog loaded");

    Ok(LoadedCatalog {
        items,
        file_count,
        config,
    })
}

pub fn build_context(catalog: Option<&Path>, favorites: &[String]) -> Result<MenuContext, String> {
    let loaded = load_catalog(catalog)?;
    let mut store = MenuStore::from_items(loaded.items).map_err(|e| e.to_string())?;

    let (name, config_favorites, settings) = match loaded.config {
        Some(c) => (c.name, c.favorites, c.settings.unwrap_or_default()),
        None => (None, Vec::new(), Settings::default()),
    };

    for id in config_favorites.iter().chain(favorites) {
        if !store.is_favorite(id) {
            store.toggle_favorite(id);
        }
    }

    Ok(MenuContext {
        session: Session::with_store(store).with_settings(settings),
        name,
        file_count: loaded.file_count,
    })
}
