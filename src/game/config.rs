use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted grid side. Keeps cell indices inside `i32`.
pub const MAX_GRID_DIM: usize = 10_000;

/// Largest accepted timer period (one hour)
pub const MAX_INTERVAL_MS: u64 = 3_600_000;

/// Configuration for a game session.
///
/// Fixed once the session starts. Every field has a default, so a config
/// file only needs the values it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the collision grid
    pub grid_width: usize,
    /// Height of the collision grid
    pub grid_height: usize,
    /// Side of the square bomb icon, in cells
    pub icon_size: usize,

    /// Base movement interval; the real tick period is this divided by speed
    pub update_interval_ms: u64,
    pub min_speed: u32,
    pub max_speed: u32,
    pub initial_speed: u32,

    /// Period of the bomb spawner
    pub spawn_interval_ms: u64,
    /// Period of the elapsed-time counter
    pub clock_interval_ms: u64,
    /// Samples tried per spawn before the cycle is skipped
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 400,
            grid_height: 400,
            icon_size: 24,
            update_interval_ms: 50,
            min_speed: 1,
            max_speed: 7,
            initial_speed: 4,
            spawn_interval_ms: 500,
            clock_interval_ms: 1000,
            max_spawn_attempts: 10_000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(64, 64)
    }

    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.grid_width > MAX_GRID_DIM || self.grid_height > MAX_GRID_DIM {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_DIM,
            });
        }

        // Spawn coordinates are sampled from [1, dim - icon_size]
        if self.icon_size == 0
            || self.icon_size >= self.grid_width
            || self.icon_size >= self.grid_height
        {
            return Err(ConfigError::IconTooLarge {
                icon_size: self.icon_size,
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.min_speed == 0 || self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedBounds {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(ConfigError::InitialSpeed {
                speed: self.initial_speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if self.update_interval_ms == 0 {
            return Err(ConfigError::ZeroSetting("update_interval_ms"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroSetting("spawn_interval_ms"));
        }
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::ZeroSetting("clock_interval_ms"));
        }
        for (name, value) in [
            ("update_interval_ms", self.update_interval_ms),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("clock_interval_ms", self.clock_interval_ms),
        ] {
            if value > MAX_INTERVAL_MS {
                return Err(ConfigError::IntervalTooLong {
                    name,
                    value,
                    max: MAX_INTERVAL_MS,
                });
            }
        }
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroSetting("max_spawn_attempts"));
        }

        Ok(())
    }

    /// Movement tick period at the given speed (`update_interval / speed`)
    pub fn advance_period(&self, speed: u32) -> Duration {
        let micros = self.update_interval_ms.saturating_mul(1000) / u64::from(speed.max(1));
        Duration::from_micros(micros.max(1))
    }

    pub fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }
}
