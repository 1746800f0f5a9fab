use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use line_snake::game::GameConfig;
use line_snake::modes::HumanMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "line_snake")]
#[command(version, about = "Steer a line around a grid while bombs rain down")]
struct Cli {
    /// JSON file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Starting speed
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for bomb placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("line_snake=info")))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    info!(?config, seed = ?cli.seed, "starting line_snake");

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}
