use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use flowcare::app::{App, AppEvent};
use flowcare::config::Config;
use flowcare::nav::LoggingNavigator;
use flowcare::prefs::{FilePrefs, PreferenceStore, DARK_MODE_KEY};
use flowcare::theme::ThemeVariant;
use flowcare::ui;

/// Get the config directory path (~/.config/flowcare/)
fn default_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("flowcare"))
}

#[derive(Parser, Debug)]
#[command(name = "flowcare", about = "Terminal education hub for menstrual health")]
struct Args {
    /// Use a different config directory
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Reset stored preferences (delete prefs.toml)
    #[arg(long)]
    reset_prefs: bool,

    /// Start with this theme ("dark" or "light") instead of the stored one
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        tracing::info!(path = %config_dir.display(), "Created config directory");
    }

    let config_path = config_dir.join("config.toml");
    let prefs_path = config_dir.join("prefs.toml");

    // Handle --reset-prefs flag
    if args.reset_prefs && prefs_path.exists() {
        std::fs::remove_file(&prefs_path).context("Failed to delete preference file")?;
        println!("Preferences reset.");
    }

    // Config parse errors are surfaced before the TUI starts; a missing
    // file is not an error.
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    let prefs = Arc::new(FilePrefs::open(&prefs_path));

    // Create app state: stored dark-mode flag wins, then --theme, then the
    // config default.
    let mut app = if let Some(name) = args.theme.as_deref() {
        let variant = ThemeVariant::from_str_name(name)
            .with_context(|| format!("Unknown theme '{}'", name))?;
        App::with_theme(prefs, Arc::new(LoggingNavigator), variant)
    } else if prefs.get(DARK_MODE_KEY).is_some() {
        App::new(prefs, Arc::new(LoggingNavigator))
    } else {
        let variant = ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Light);
        App::with_theme(prefs, Arc::new(LoggingNavigator), variant)
    };

    // Apply keybinding overrides from config
    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!(warning = %warning, "Keybinding override skipped");
    }

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
