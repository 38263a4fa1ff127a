//! Velocity vector

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimal 2D vector used for the target's velocity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D(Vec2);

impl Vector2D {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0.y = y;
    }

    /// Euclidean norm
    pub fn length(&self) -> f32 {
        self.0.length()
    }

    /// Scale to unit length. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length > 0.0 {
            self.0 /= length;
        }
    }

    pub fn scale(&mut self, factor: f32) {
        self.0 *= factor;
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}
