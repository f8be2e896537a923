//! Gem Breakout - a Breakout arcade game with falling bonus gems
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, block/gem lifecycle, session)
//! - `input`: Input edges and the per-tick input funnel
//! - `view`: Read-only frame snapshot for whatever draws the game
//! - `config`: Data-driven game tuning

pub mod config;
pub mod input;
pub mod sim;
pub mod view;

pub use config::{ConfigError, GameConfig};
pub use input::{InputEdge, InputQueue, Key, KeyAction};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Play-field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 920.0;

    /// Shared speed constant: paddle moves at this rate, ball at half of it
    pub const VELOCITY: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 104.0;
    pub const PADDLE_HEIGHT: f32 = 24.0;
    /// Paddle top edge sits this far above the field floor
    pub const PADDLE_FLOOR_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 22.0;

    /// Block grid: 10 columns x 5 rows
    pub const BLOCK_WIDTH: f32 = 64.0;
    pub const BLOCK_HEIGHT: f32 = 32.0;
    pub const BLOCK_COLUMNS: usize = 10;
    pub const BLOCK_ROWS: usize = 5;

    /// Gems
    pub const GEM_COUNT: usize = 5;
    pub const GEM_INITIAL_ACTIVE: usize = 1;
    pub const GEM_SIZE: f32 = 32.0;
    /// Gem fall rate (pixels per second)
    pub const GEM_FALL_RATE: f32 = 150.0;
    /// Gem update gate (milliseconds of accumulated time)
    pub const GEM_GATE_INTERVAL_MS: f32 = 10.0;

    /// Scoring
    pub const BLOCK_AWARD: u64 = 150;
    pub const GEM_AWARD: u64 = 10_000;

    /// Lives at session start
    pub const STARTING_LIVES: i32 = 3;
    /// Ball must fall this far past the floor before a life is lost
    pub const FLOOR_MARGIN: f32 = 50.0;
}
