//! Canvas 2D backend for the drawing surface (wasm only)

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::sim::Viewport;

use super::surface::{Color, Surface};

/// A [`Surface`] drawing through a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) {
        let segments = js_sys::Array::new();
        for d in dash {
            segments.push(&JsValue::from_f64(f64::from(*d)));
        }
        let _ = self.ctx.set_line_dash(&segments);

        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, size_px: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{size_px}px Arial"));
        let _ = self.ctx.fill_text(text, origin.x as f64, origin.y as f64);
    }
}
