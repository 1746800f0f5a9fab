//! line_snake - steer a growing line around a grid while bombs appear
//!
//! This library provides:
//! - Core game logic: collision grid, movement, bomb spawning, timers (game module)
//! - Key mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive play loop (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::ConfigError;
