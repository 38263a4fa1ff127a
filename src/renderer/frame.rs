//! In-memory frame buffer

use glam::{Affine2, Vec2};

use super::shapes::quad;
use super::vertex::{Vertex, with_alpha};
use super::{Canvas, Sprite};

/// One drawable frame: a triangle list plus the canvas transform state
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    vertices: Vec<Vertex>,
    transform: Affine2,
    saved: Vec<Affine2>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vertices: Vec::with_capacity(64),
            transform: Affine2::IDENTITY,
            saved: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Drop all geometry and reset the transform, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.transform = Affine2::IDENTITY;
        self.saved.clear();
    }

    /// Clear and change the frame size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of filled rectangles/sprites in the frame
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Raw vertex bytes, ready for a GPU buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Current transform stack depth
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }
}

impl Canvas for FrameBuffer {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices
            .extend_from_slice(&quad(&self.transform, min, size, color));
    }

    fn draw_sprite(&mut self, sprite: &Sprite, alpha: f32) {
        let color = with_alpha(sprite.color, alpha.clamp(0.0, 1.0));
        self.fill_rect(Vec2::ZERO, sprite.size, color);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(t) => self.transform = t,
            None => log::warn!("Canvas restore without matching save"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }
}
