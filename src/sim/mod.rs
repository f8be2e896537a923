//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta time comes from the host, never from a wall clock
//! - Seeded RNG only
//! - Stable iteration order (by index into the block and gem lists)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod session;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{
    aabb_overlap, ball_block_collision, ball_ceiling_collision, ball_floor_collision,
    ball_paddle_collision, ball_wall_collision,
};
pub use entity::{Aabb, Entity};
pub use session::GamePhase;
pub use state::{GameEvent, GameState, PaddleInput};
pub use tick::{FrameTime, TickInput, tick};
pub use vector::Vector2D;
