use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{board::Board, error::GameError};

/// Ticks per snake move
pub const REFRESH_RATE: u64 = 2;
/// Ticks between food additions once the first food is down
pub const FOOD_ADD_RATE: u64 = 25;
/// Milliseconds between ticks
pub const SLEEP_TIME_MS: u64 = 30;
pub const NUM_CELLS_WIDE: usize = 50;
pub const NUM_CELLS_TALL: usize = 30;
/// Pixel size of one cell in graphical front-ends
pub const CELL_SIZE: u32 = 10;
/// Food is not added once less than this share of the board is free
pub const MIN_FREE_RATIO: f64 = 0.2;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticks per snake move
    pub refresh_rate: u64,
    /// Ticks between food additions
    pub food_add_rate: u64,
    /// Milliseconds between ticks
    pub sleep_time_ms: u64,
    /// Width of the board in cells, walls included
    pub num_cells_wide: usize,
    /// Height of the board in cells, walls included
    pub num_cells_tall: usize,
    /// Pixel size of a cell
    pub cell_size: u32,
    /// Minimum free share of the board for food placement
    pub min_free_ratio: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            refresh_rate: REFRESH_RATE,
            food_add_rate: FOOD_ADD_RATE,
            sleep_time_ms: SLEEP_TIME_MS,
            num_cells_wide: NUM_CELLS_WIDE,
            num_cells_tall: NUM_CELLS_TALL,
            cell_size: CELL_SIZE,
            min_free_ratio: MIN_FREE_RATIO,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            num_cells_wide: width,
            num_cells_tall: height,
            ..Default::default()
        }
    }

    /// The 6x6 board used by the search scenarios
    pub fn small() -> Self {
        Self::new(6, 6)
    }

    /// Load a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), GameError> {
        if self.num_cells_tall < Board::MIN_SIDE || self.num_cells_wide < Board::MIN_SIDE {
            return Err(GameError::BoardTooSmall {
                rows: self.num_cells_tall,
                cols: self.num_cells_wide,
            });
        }
        if self.refresh_rate == 0 {
            return Err(GameError::invalid_config("refresh_rate must be positive"));
        }
        if self.food_add_rate == 0 {
            return Err(GameError::invalid_config("food_add_rate must be positive"));
        }
        if !(self.min_free_ratio > 0.0 && self.min_free_ratio <= 1.0) {
            return Err(GameError::invalid_config(
                "min_free_ratio must lie in (0, 1]",
            ));
        }
        Ok(())
    }
}
