//! Error types for board construction and cell access.

use thiserror::Error;

/// Errors raised by the game model.
///
/// Gameplay conditions (collisions, a full board) are never errors; they are
/// reported through [`crate::game::CycleReport`]. These variants cover misuse
/// of the model API and invalid custom layouts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A cell lookup fell outside the board
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A neighbor was requested for a wall cell on the boundary
    #[error("cell ({row}, {col}) lies on the boundary and has no neighbors")]
    BoundaryNeighbor { row: usize, col: usize },

    /// The board has no interior large enough to hold a snake
    #[error("a {rows}x{cols} board is too small (minimum 4x4)")]
    BoardTooSmall { rows: usize, cols: usize },

    /// A custom snake layout broke the snake invariants
    #[error("invalid snake: {0}")]
    InvalidSnake(String),

    /// A custom food layout broke the food invariants
    #[error("invalid food: {0}")]
    InvalidFood(String),

    /// Cell types disagree with the board, snake or food bookkeeping
    #[error("corrupt board: {0}")]
    CorruptBoard(String),

    /// A configuration value is unusable
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for game model operations.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    #[must_use]
    pub fn invalid_snake<S: Into<String>>(msg: S) -> Self {
        Self::InvalidSnake(msg.into())
    }

    #[must_use]
    pub fn invalid_food<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFood(msg.into())
    }

    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
