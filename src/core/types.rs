use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGB color attached to render-facing entities.
///
/// The engine never draws anything itself; colors ride along so an
/// external renderer can query everything it needs in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(127, 127, 127);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Axis-aligned rectangle describing where a body should be drawn.
///
/// `x`/`y` are the top-left corner in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Builds the rectangle around a center point with the given extent.
    pub fn from_center(center: Vec2, extent: Vec2) -> Self {
        Self {
            x: center.x - 0.5 * extent.x,
            y: center.y - 0.5 * extent.y,
            width: extent.x,
            height: extent.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }
}
