use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use minipaint::{
    backend,
    config::{Config, ConfigSource},
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MINIPAINT_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "minipaint")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Full-screen freehand drawing surface for Wayland compositors"
)]
struct Cli {
    /// Read configuration from PATH instead of ~/.config/minipaint/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the example configuration file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "init_config")]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    let (config, config_source) = match Config::load(cli.config.as_deref()) {
        Ok(loaded) => (loaded.config, loaded.source),
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            (Config::default(), ConfigSource::Default)
        }
    };

    if cli.print_config {
        match &config_source {
            ConfigSource::Default => println!("# Built-in defaults"),
            ConfigSource::File(path) => println!("# Loaded from {}", path.display()),
        }
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    if let ConfigSource::Default = config_source {
        log::info!("No config file in use; run with --init-config to create one");
    }

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor with wlr-layer-shell (Sway, Hyprland, ...).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting drawing surface...");
    log::info!("Controls:");
    log::info!("  - Draw: press and drag (mouse or touch)");
    log::info!("  - Exit: Escape or Q");

    backend::run_wayland(config)?;

    log::info!("Drawing surface closed.");
    Ok(())
}
