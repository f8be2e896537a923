//! Positioned, sized, visibility-flagged game objects
//!
//! Paddle, ball, every block and every gem are [`Entity`] values. Size is
//! fixed at creation; visibility is the only lifecycle flag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle covering `[x, x + w) x [y, y + h)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// A game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner in field pixels
    pub pos: Vec2,
    size: Vec2,
    pub visible: bool,
    /// Pixels per second
    pub speed: f32,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size,
            visible: true,
            speed,
        }
    }

    /// Same as [`Entity::new`] but starts hidden
    pub fn hidden(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            visible: false,
            ..Self::new(pos, size, speed)
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: self.size,
        }
    }
}
