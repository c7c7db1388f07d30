//! Drawing surface contract

use glam::Vec2;

use crate::sim::Viewport;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from byte RGB values
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// CSS `rgba(...)` form, for canvas-style backends
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            self.alpha
        )
    }
}

/// The drawing primitives a scene backend must provide.
///
/// Implementations hold whatever native context they need; the scene only
/// ever issues these four calls, in draw order, and never reads anything
/// back.
pub trait Surface {
    /// Reset the whole drawable area
    fn clear(&mut self, viewport: Viewport);

    /// Fill an axis-aligned rectangle; `origin` is the top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Stroke a straight line with the given on/off dash pattern
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]);

    /// Draw a line of text; `origin` is the left end of the baseline
    fn fill_text(&mut self, text: &str, origin: Vec2, size_px: f32, color: Color);
}
