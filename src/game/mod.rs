//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts drive it through [`GameEngine::cycle`] and [`GameEngine::apply`] and observe
//! it through the ports in [`ports`].

pub mod action;
pub mod autopilot;
pub mod board;
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod ports;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction, SnakeMode};
pub use autopilot::SearchOutcome;
pub use board::Board;
pub use cell::{Cell, CellColor, CellType, Position};
pub use config::GameConfig;
pub use engine::{Advance, CycleReport, GameEngine};
pub use error::GameError;
pub use food::{FoodPlacement, FoodSet};
pub use ports::{AudioPort, GameView, Snapshot, SoundEvent, ViewPort};
pub use snake::Snake;
pub use state::{CollisionType, GameState};
