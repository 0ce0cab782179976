use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_of_growth::game::GameConfig;
use game_of_growth::modes::{HeadlessMode, HumanMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_growth")]
#[command(version, about = "Snake on a Game of Life board")]
struct Cli {
    /// How to run the game
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    grid_size: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Tick limit for headless runs
    #[arg(long, default_value = "10000")]
    max_ticks: u32,

    /// Write logs here (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Human,
    /// Run without a terminal, steered by the autopilot
    Headless,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (&cli.log_file, &cli.mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The terminal UI owns stderr; without a log file stay quiet.
        (None, Mode::Human) => {}
        (None, Mode::Headless) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate()?;
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
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
            println!("Highest score: {}", human_mode.high_score());
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config, cli.max_ticks);
            let report = headless_mode.run()?;
            println!(
                "score {} after {} ticks over {} session(s){}",
                report.score,
                report.ticks,
                report.sessions,
                if report.finished { "" } else { " (tick limit)" }
            );
        }
    }

    Ok(())
}
