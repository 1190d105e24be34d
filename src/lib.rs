//! Snake Pro - grid snake with a breadth-first search autopilot
//!
//! This library provides:
//! - Core game model and per-tick engine (game module)
//! - Keyboard mapping to engine commands (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - Host loops for interactive and headless play (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
