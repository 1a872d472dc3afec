use super::{render, App};
use crate::output::OutputFormat;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use reelshelf_config::{Config, PathManager};
use serde_json::json;
use std::path::Path;

pub async fn run_config(app: &App, cmd: Option<ConfigCommands>) -> Result<()> {
    match cmd.unwrap_or(ConfigCommands::Show { full: false }) {
        ConfigCommands::Show { full } => show_config(app, full),
        ConfigCommands::Init { force } => init_config(app, force),
    }
}

/// Load the config file (defaults when it doesn't exist) and validate it.
pub fn load_config(paths: &PathManager) -> Result<Config> {
    let config_file = paths.config_file();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config {}: {}", config_file.display(), e))?;
    Ok(config)
}

fn section(title: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(title)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn path_or_default(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_else(|| "(default)".to_string())
}

fn show_config(app: &App, full: bool) -> Result<()> {
    let config = &app.config;
    let config_file = app.paths.config_file();
    let store_dir = config.store_dir(&app.paths);

    if app.output.format() != OutputFormat::Human {
        let mut data = json!({
            "config_file": config_file,
            "config_file_exists": config_file.exists(),
            "store_dir": store_dir,
            "api": config.api,
            "storage": config.storage,
        });
        if full {
            data["images"] = serde_json::to_value(&config.images)?;
            data["logging"] = serde_json::to_value(&config.logging)?;
        }
        app.output.json(&data);
        return Ok(());
    }
    if app.output.is_quiet() {
        return Ok(());
    }

    app.output.println(render::heading("Configuration"));
    let mut files = render::new_table(vec!["Config File", &config_file.display().to_string()]);
    if !config_file.exists() {
        files.add_row(vec![Cell::new("Status"), Cell::new("not written yet, using defaults")]);
    }
    files.add_row(vec![Cell::new("Store"), Cell::new(store_dir.display())]);
    app.output.println(files.to_string());

    let mut api = section("Catalog API");
    api.add_row(vec![Cell::new("Base URL"), Cell::new(&config.api.base_url)]);
    api.add_row(vec![Cell::new("Use proxy"), Cell::new(render::check(config.api.use_proxy))]);
    if config.api.use_proxy || full {
        api.add_row(vec![Cell::new("CORS proxy"), Cell::new(&config.api.cors_proxy)]);
    }
    api.add_row(vec![Cell::new("Language"), Cell::new(&config.api.language)]);
    api.add_row(vec![Cell::new("Streaming service"), Cell::new(&config.api.streaming_service)]);
    api.add_row(vec![
        Cell::new("Timeout"),
        Cell::new(
            config
                .api
                .timeout_seconds
                .map(|s| format!("{}s", s))
                .unwrap_or_else(|| "none".to_string()),
        ),
    ]);
    app.output.println(api.to_string());

    if full {
        let mut images = section("Images");
        images.add_row(vec![Cell::new("Base URL"), Cell::new(&config.images.base_url)]);
        images.add_row(vec![Cell::new("Default size"), Cell::new(&config.images.default_size)]);
        images.add_row(vec![Cell::new("Placeholder"), Cell::new(&config.images.placeholder)]);
        app.output.println(images.to_string());

        let mut logging = section("Logging");
        logging.add_row(vec![Cell::new("Level"), Cell::new(&config.logging.level)]);
        logging.add_row(vec![
            Cell::new("File"),
            Cell::new(path_or_default(config.logging.file.as_deref())),
        ]);
        app.output.println(logging.to_string());
    } else {
        app.output.println("Use --full to include image and logging settings");
    }
    Ok(())
}

fn init_config(app: &App, force: bool) -> Result<()> {
    let config_file = app.paths.config_file();
    if config_file.exists() && !force {
        app.output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    app.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;
    app.output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
