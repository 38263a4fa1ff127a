//! Tap hit-testing
//!
//! The target is a rectangle in screen space. A tap counts when it lands
//! inside it: the left and top edges belong to the box, the right and bottom
//! edges don't.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box following the target sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Move the box so its top-left corner sits at `pos`, keeping its size
    pub fn offset_to(&mut self, pos: Vec2) {
        self.min = pos;
    }

    /// Check if a point is inside the box (`min <= p < max` on both axes)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inside_and_edges() {
        let hb = Hitbox::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(hb.contains(Vec2::new(25.0, 40.0)));
        assert!(hb.contains(Vec2::new(10.0, 20.0)));
        assert!(hb.contains(Vec2::new(39.9, 59.9)));
        assert!(!hb.contains(Vec2::new(9.9, 40.0)));
        assert!(!hb.contains(Vec2::new(25.0, 60.1)));
    }

    #[test]
    fn test_right_and_bottom_edges_miss() {
        let hb = Hitbox::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(!hb.contains(Vec2::new(40.0, 60.0)));
        assert!(!hb.contains(Vec2::new(40.0, 30.0)));
        assert!(!hb.contains(Vec2::new(25.0, 60.0)));
        // Top-left corner and edges stay inside
        assert!(hb.contains(Vec2::new(10.0, 59.0)));
        assert!(hb.contains(Vec2::new(39.0, 20.0)));
    }

    #[test]
    fn test_offset_keeps_size() {
        let mut hb = Hitbox::new(Vec2::ZERO, Vec2::new(96.0, 96.0));
        hb.offset_to(Vec2::new(100.0, 200.0));
        assert_eq!(hb.min, Vec2::new(100.0, 200.0));
        assert_eq!(hb.max(), Vec2::new(196.0, 296.0));
        assert_eq!(hb.center(), Vec2::new(148.0, 248.0));
        assert!(!hb.contains(Vec2::new(50.0, 50.0)));
    }
}
