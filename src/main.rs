//! TucuMap - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tucumap::config::{self, CliOverrides};
use tucumap::model::{GeoPoint, RouteCatalog};
use tucumap::source::{parse_coordinate_pair, provider_for, spawn_lookup};
use tucumap::state::AppState;

/// TucuMap - terminal map of transit lines with a simulated bus
#[derive(Parser, Debug)]
#[command(name = "tucumap")]
#[command(version)]
#[command(about = "Terminal map viewer for transit lines with a simulated bus playback")]
pub struct Args {
    /// Route catalog JSON file (built-in sample lines if not provided)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Device position as LAT,LON
    #[arg(long, value_parser = parse_coordinate_pair, allow_hyphen_values = true)]
    pub location: Option<GeoPoint>,

    /// Pretend the device has no position source
    #[arg(long, conflicts_with = "location")]
    pub no_location: bool,

    /// Start with the satellite map style
    #[arg(long)]
    pub satellite: bool,
}

impl Args {
    /// Flags that override the config file and environment.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalog_path: self.catalog.clone(),
            device_location: self.location,
            no_location: self.no_location,
            satellite: self.satellite,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(args.config.clone(), args.overrides())?;

    tucumap::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let catalog = match &config.catalog_path {
        Some(path) => RouteCatalog::load(path)?,
        None => RouteCatalog::builtin(),
    };
    info!(lines = catalog.len(), "Route catalog ready");

    let mut app_state = AppState::new(catalog);
    app_state.map_style = config.map_style;

    let lookup = spawn_lookup(provider_for(config.device_location));

    tucumap::view::run(app_state, lookup)?;

    info!("Exited cleanly");
    Ok(())
}
