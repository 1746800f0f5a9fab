//! Core game logic for the line-and-bombs snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Presentation goes through the traits in [`surface`].

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod scheduler;
pub mod spawner;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{AdvanceOutcome, GameEngine, GameStatus};
pub use grid::{Cell, CollisionGrid};
pub use scheduler::{Activity, Scheduler};
pub use spawner::ObstacleSpawner;
pub use state::{CollisionType, Position, SnakeState};
pub use surface::{IconKind, RenderDirective, RenderSurface, TerminationSink};
