//! Game tuning
//!
//! Every gameplay constant lives in [`GameConfig`]. Defaults come from
//! [`crate::consts`]; a JSON file may override any subset of fields.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a config file could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the field floor to the paddle's top edge
    pub paddle_floor_offset: f32,
    /// Shared speed constant. The paddle moves at this rate, the ball at half.
    pub velocity: f32,

    // === Ball ===
    pub ball_size: f32,

    // === Blocks ===
    pub block_width: f32,
    pub block_height: f32,
    pub block_columns: usize,
    pub block_rows: usize,
    /// Top-left of block 0
    pub grid_origin: (f32, f32),

    // === Gems ===
    pub gem_count: usize,
    /// Gems visible at session start; the rest stay dormant
    pub gem_initial_active: usize,
    pub gem_size: f32,
    pub gem_fall_rate: f32,
    pub gem_gate_interval_ms: f32,

    // === Scoring & lives ===
    pub block_award: u64,
    pub gem_award: u64,
    pub starting_lives: i32,
    pub floor_margin: f32,

    /// Seed for gem placement
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_offset: PADDLE_FLOOR_OFFSET,
            velocity: VELOCITY,

            ball_size: BALL_SIZE,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_columns: BLOCK_COLUMNS,
            block_rows: BLOCK_ROWS,
            grid_origin: (0.0, 0.0),

            gem_count: GEM_COUNT,
            gem_initial_active: GEM_INITIAL_ACTIVE,
            gem_size: GEM_SIZE,
            gem_fall_rate: GEM_FALL_RATE,
            gem_gate_interval_ms: GEM_GATE_INTERVAL_MS,

            block_award: BLOCK_AWARD,
            gem_award: GEM_AWARD,
            starting_lives: STARTING_LIVES,
            floor_margin: FLOOR_MARGIN,

            seed: 0,
        }
    }
}

impl GameConfig {
    /// Total blocks in the grid
    pub fn block_count(&self) -> usize {
        self.block_columns * self.block_rows
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Paddle's pinned y
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_floor_offset
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Top-left of the block at `index` (row = index / columns)
    pub fn block_position(&self, index: usize) -> Vec2 {
        let column = index % self.block_columns;
        let row = index / self.block_columns;
        Vec2::new(
            self.grid_origin.0 + column as f32 * self.block_width,
            self.grid_origin.1 + row as f32 * self.block_height,
        )
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::Invalid("field size must be positive"));
        }
        if !(self.paddle_width > 0.0 && self.paddle_width <= self.field_width) {
            return Err(ConfigError::Invalid("paddle must fit inside the field"));
        }
        if !(self.gem_size > 0.0 && self.gem_size <= self.field_width) {
            return Err(ConfigError::Invalid("gems must fit inside the field"));
        }
        if !(self.ball_size > 0.0) {
            return Err(ConfigError::Invalid("ball size must be positive"));
        }
        if self.block_columns == 0 || self.block_rows == 0 {
            return Err(ConfigError::Invalid("block grid must not be empty"));
        }
        if self.gem_count == 0 {
            return Err(ConfigError::Invalid("gem count must be at least one"));
        }
        if self.starting_lives <= 0 {
            return Err(ConfigError::Invalid("starting lives must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_count(), 50);
        assert_eq!(config.paddle_max_x(), 640.0 - PADDLE_WIDTH);
        assert_eq!(config.field_center(), Vec2::new(320.0, 460.0));
    }

    #[test]
    fn test_block_layout() {
        let config = GameConfig::default();
        assert_eq!(config.block_position(0), Vec2::new(0.0, 0.0));
        assert_eq!(config.block_position(9), Vec2::new(576.0, 0.0));
        assert_eq!(config.block_position(10), Vec2::new(0.0, 32.0));
        assert_eq!(config.block_position(23), Vec2::new(192.0, 64.0));
    }

    #[test]
    fn test_partial_json() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "seed": 7 }"#).unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "gem_count": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "paddle_width": 1000.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/nonexistent/gem-breakout.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_nan_sizes_rejected() {
        let config = GameConfig {
            gem_size: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        let config = GameConfig {
            field_height: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
