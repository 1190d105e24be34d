use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snake_pro::game::GameConfig;
use snake_pro::modes::{HeadlessMode, HumanMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_pro")]
#[command(version, about = "Snake with a shortest-path autopilot")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Board width in cells, walls included
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells, walls included
    #[arg(long)]
    height: Option<usize>,

    /// TOML file with configuration overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement (random if omitted in human mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the autopilot engaged
    #[arg(long)]
    ai: bool,

    /// Cycle limit for headless runs
    #[arg(long, default_value = "5000")]
    ticks: u64,

    /// Write logs here (human mode draws on stderr, so it logs nowhere by default)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Let the autopilot play without a terminal and print a summary
    Headless,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snake_pro=info"));

    match (&cli.log_file, &cli.mode) {
        (Some(path), _) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Mode::Headless) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        (None, Mode::Human) => {}
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = cli.width {
        config.num_cells_wide = width;
    }
    if let Some(height) = cli.height {
        config.num_cells_tall = height;
    }
    config.validate().context("Invalid board configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = load_config(&cli)?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.seed, cli.ai)?;
            human_mode.run().await?;
        }
        Mode::Headless => {
            let seed = cli.seed.unwrap_or(0);
            let summary = HeadlessMode::new(config, seed, cli.ticks)?.run();
            println!("{summary}");
        }
    }

    Ok(())
}
