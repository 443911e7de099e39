//! The drawing-surface boundary.
//!
//! The layout engine only ever talks to a [`Canvas`]: a 2D context with
//! save/restore state, a translate/scale transform, rectangle and text
//! primitives, and text measurement. [`RasterCanvas`] is the software RGBA
//! implementation; [`TraceCanvas`] is a deterministic fixed-metric backend
//! that records draw ops for tests.

mod raster;
mod trace;

pub use raster::RasterCanvas;
pub use trace::{DrawOp, TraceCanvas};

use thiserror::Error;

use crate::types::{Color, FontSpec, TextAlign};

/// Errors from fallible surface operations (font parsing, pixel export).
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to parse font: {0}")]
    Font(String),

    #[error("failed to encode png: {0}")]
    Png(#[from] image::ImageError),
}

/// A 2D raster drawing context.
///
/// State (fill/stroke colors, font, text alignment, transform) is mutated in
/// place and snapshotted with [`save`](Canvas::save)/[`restore`](Canvas::restore);
/// the painter brackets every localized change with a save/restore pair so
/// sibling paint operations never observe each other's transient state.
///
/// Text is drawn with a *middle* baseline: `y` is the vertical center of the
/// line box. `fill_text`'s `x` is the alignment anchor (left edge, center, or
/// right edge depending on the current [`TextAlign`]); a `max_width` condenses
/// the run horizontally when it would overflow.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resizes the surface, clearing pixels and resetting all paint state and
    /// the transform.
    fn resize(&mut self, width: u32, height: u32);

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_font(&mut self, font: FontSpec);
    fn set_text_align(&mut self, align: TextAlign);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>);

    /// Width of `text` in logical pixels under the current font.
    fn measure_text(&self, text: &str) -> f32;
}
