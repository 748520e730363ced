use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::continuous::{DEFAULT_CELL_SIZE, DEFAULT_TOLERANCE};
use crate::motion::DEFAULT_ACCEL;

/// Which movement representation drives the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionMode {
    /// One cell per tick, exact-cell collisions
    #[default]
    Grid,
    /// Continuous velocity, tolerance-based collisions
    Smooth,
}

/// Configuration values that cannot be played
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("initial snake length {length} does not fit a grid {width} cells wide")]
    SnakeTooLong { length: usize, width: usize },
    #[error("initial snake length {length} leaves no free cell for food on a {width}x{height} grid")]
    NoRoomForFood {
        length: usize,
        width: usize,
        height: usize,
    },
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    pub motion: MotionMode,

    // Smooth movement
    /// Game units per grid cell
    pub cell_size: f64,
    /// Head-to-body distance that counts as a self collision
    pub tolerance: f64,
    /// Head-to-food distance that counts as eating
    pub food_tolerance: f64,
    /// Head speed in game units per second
    pub speed: f64,
    /// Rate at which velocity converges on the input direction
    pub accel: f64,

    /// Grid ticks per second
    pub tick_hz: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            motion: MotionMode::Grid,
            cell_size: DEFAULT_CELL_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            food_tolerance: DEFAULT_TOLERANCE,
            speed: 4.0,
            accel: DEFAULT_ACCEL,
            tick_hz: 8.0,
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
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    /// Read a JSON config file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a session cannot start without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        // The snake spawns at the centre, facing right, trailing to the left
        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_width / 2 + 1 {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }
        if self.initial_snake_length >= self.grid_width * self.grid_height {
            return Err(ConfigError::NoRoomForFood {
                length: self.initial_snake_length,
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        for (field, value) in [
            ("cell_size", self.cell_size),
            ("tolerance", self.tolerance),
            ("food_tolerance", self.food_tolerance),
            ("speed", self.speed),
            ("accel", self.accel),
            ("tick_hz", self.tick_hz),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
