//! Scene rendering
//!
//! The scene is a pure projection of simulation state onto a [`Surface`] —
//! a capability trait with the four primitives the scene needs (clear,
//! filled rectangles, dashed strokes, text). Backends implement `Surface`
//! over whatever 2D drawing API they have; the wasm build ships one for
//! `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::render;
pub use surface::{Color, Surface};
