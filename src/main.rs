use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use starrate::config::{Config, ConfigStore};
use starrate::{logging, ui};

/// Pick a star rating in the terminal.
#[derive(Debug, Parser)]
#[command(name = "starrate", version)]
struct Cli {
    /// Number of stars to show (out-of-range values fall back to the maximum)
    #[arg(short, long)]
    stars: Option<usize>,

    /// Rating preset before any input
    #[arg(short, long)]
    rating: Option<usize>,

    /// Star count applied right after the preset
    #[arg(long, value_name = "STARS")]
    reconfigure_to: Option<usize>,

    /// Path to the config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    apply_overrides(&mut config, &cli);

    let log_path = logging::init(&config.logging, cli.log_file.as_deref())?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting starrate"
    );

    ui::run(ConfigStore::new(config, config_path)).context("UI terminated with an error")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(stars) = cli.stars {
        config.rating.stars = stars;
    }
    if let Some(rating) = cli.rating {
        config.rating.initial_rating = rating;
    }
    if let Some(count) = cli.reconfigure_to {
        config.rating.reconfigure_to = Some(count);
    }
}
