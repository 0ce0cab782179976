use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub grid_size: usize,
    /// Session length before rebirth, in milliseconds
    pub session_duration_ms: u64,
    /// Opening part of each session where live cells cannot hurt the snake
    pub invincible_duration_ms: u64,
    /// Length of the snake at the start of every session
    pub initial_snake_length: usize,
    /// Simulation steps per second
    pub tick_rate_hz: u32,
    /// Seed for food placement; `None` draws from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            session_duration_ms: 10_000,
            invincible_duration_ms: 3_000,
            initial_snake_length: 9,
            tick_rate_hz: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            initial_snake_length: 3,
            ..Self::new(12)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read a TOML file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_rate_hz > 0, "tick_rate_hz must be positive");
        ensure!(
            self.session_duration_ms > 0,
            "session_duration_ms must be positive"
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial_snake_length must be positive"
        );
        ensure!(
            self.grid_size / 2 + self.initial_snake_length <= self.grid_size,
            "a {len}-segment snake does not fit on a {n}x{n} grid",
            len = self.initial_snake_length,
            n = self.grid_size
        );
        Ok(())
    }

    pub fn session_duration(&self) -> Duration {
        Duration::from_millis(self.session_duration_ms)
    }

    pub fn invincible_duration(&self) -> Duration {
        Duration::from_millis(self.invincible_duration_ms)
    }

    /// Simulated time covered by one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }
}
