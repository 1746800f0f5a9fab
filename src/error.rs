//! Error types for line_snake.
//!
//! Collisions are gameplay outcomes and never show up here; this covers
//! configuration problems caught before a session starts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`](crate::game::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grid has a zero dimension
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid {
        /// Configured width
        width: usize,
        /// Configured height
        height: usize,
    },

    /// Grid is larger than the engine supports
    #[error("grid {width}x{height} exceeds the {max}x{max} limit")]
    GridTooLarge {
        /// Configured width
        width: usize,
        /// Configured height
        height: usize,
        /// Largest accepted side
        max: usize,
    },

    /// Bomb icon does not fit inside the grid with a one-cell margin
    #[error("icon size {icon_size} does not fit a {width}x{height} grid")]
    IconTooLarge {
        /// Configured icon size
        icon_size: usize,
        /// Configured width
        width: usize,
        /// Configured height
        height: usize,
    },

    /// Speed bounds are unusable
    #[error("invalid speed bounds: min {min}, max {max}")]
    SpeedBounds {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// Initial speed lies outside the speed bounds
    #[error("initial speed {speed} outside [{min}, {max}]")]
    InitialSpeed {
        /// Configured initial speed
        speed: u32,
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// A timer period or the spawn attempt cap is zero
    #[error("{0} must be greater than zero")]
    ZeroSetting(&'static str),

    /// A timer period is longer than the engine supports
    #[error("{name} of {value}ms exceeds the {max}ms limit")]
    IntervalTooLong {
        /// Offending setting
        name: &'static str,
        /// Configured value
        value: u64,
        /// Largest accepted value
        max: u64,
    },

    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for a game config
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
