// ABOUTME: Color representation for the workspace UI.
// ABOUTME: Plain RGBA in linear 0-1 floats plus the default panel palette.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Window background behind all tiles
    pub const BACKGROUND: Self = Self::rgb(0.09, 0.09, 0.11);

    /// Separator bar at rest
    pub const SEPARATOR: Self = Self::rgb(0.25, 0.25, 0.30);

    /// Separator bar while hovered or dragged
    pub const SEPARATOR_ACTIVE: Self = Self::rgb(0.55, 0.60, 0.85);

    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BACKGROUND
    }
}
