//! Ball travel direction
//!
//! A thin wrapper over [`glam::Vec2`] with the handful of operations the
//! simulation needs. Reflection only ever flips component signs.

use std::ops::Mul;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Two-component direction/velocity value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D(Vec2);

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.0.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.0.y = y;
    }

    pub fn length(&self) -> f32 {
        self.0.length()
    }

    /// Scale to unit length in place. A zero vector is left untouched.
    pub fn normalise(&mut self) {
        if self.0.length_squared() > 0.0 {
            self.0 = self.0.normalize();
        }
    }

    /// Normalised copy
    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f32) -> Vector2D {
        Vector2D(self.0 * scalar)
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_unit_length() {
        let mut v = Vector2D::new(1.0, -1.0);
        v.normalise();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.x() > 0.0 && v.y() < 0.0);
        assert!((v.x() + v.y()).abs() < 1e-6);
    }

    #[test]
    fn test_normalise_zero_is_noop() {
        let mut v = Vector2D::new(0.0, 0.0);
        v.normalise();
        assert_eq!(v, Vector2D::new(0.0, 0.0));
        assert!(!v.x().is_nan());
    }

    #[test]
    fn test_scalar_multiply_leaves_operand() {
        let v = Vector2D::new(3.0, -4.0);
        let scaled = v * 2.0;
        assert_eq!(scaled, Vector2D::new(6.0, -8.0));
        assert_eq!(v, Vector2D::new(3.0, -4.0));
        assert!((scaled.length() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_component_setters() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.set_x(-v.x());
        v.set_y(5.0);
        assert_eq!(v.x(), -1.0);
        assert_eq!(v.y(), 5.0);
    }
}
