//! Render surface interface

use glam::Vec2;

/// RGBA, each channel in 0..=1
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Something circles can be drawn onto. The core never reads back from it.
pub trait Surface {
    fn draw_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);
}

/// Discards every draw call (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _line_width: f32, _color: Color) {}
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub center: Vec2,
    pub radius: f32,
    pub line_width: f32,
    pub color: Color,
}

/// Records draw calls for inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn draw_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.calls.push(DrawCall {
            center,
            radius,
            line_width,
            color,
        });
    }
}
