//! Rendering module
//!
//! The engine draws through the [`Canvas`] trait using a save/restore
//! transform stack. [`FrameBuffer`] is the in-memory implementation handed out
//! by a [`DrawSurface`](crate::platform::DrawSurface): it turns every draw call
//! into colored triangles that a GPU backend can upload as-is.

pub mod frame;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use frame::FrameBuffer;
pub use scene::{IndicatorStyle, draw_scene};
pub use vertex::Vertex;

use glam::Vec2;

use crate::settings::Settings;

/// Drawing context with a 2D transform stack
pub trait Canvas {
    /// Fill a rectangle in the current coordinate space
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]);

    /// Draw a sprite with its top-left corner at the current origin
    fn draw_sprite(&mut self, sprite: &Sprite, alpha: f32);

    /// Push the current transform
    fn save(&mut self);

    /// Pop back to the last saved transform
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn scale(&mut self, factor: Vec2);
}

/// An opaque image asset, known by its size and tint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Sprite {
    pub const fn new(size: Vec2, color: [f32; 4]) -> Self {
        Self { size, color }
    }
}

/// The two images the game needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSet {
    /// The bouncing target (its size is the hitbox size)
    pub target: Sprite,
    /// One "tap left" marker
    pub indicator: Sprite,
}

impl SpriteSet {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            target: Sprite::new(settings.target_size, vertex::colors::TARGET),
            indicator: Sprite::new(settings.indicator_size, vertex::colors::INDICATOR),
        }
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
