use unicode_width::UnicodeWidthChar;

use super::Canvas;
use crate::types::{Color, FontSpec, TextAlign};

/// A recorded draw operation, with the transform already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
        font: FontSpec,
        color: Color,
        max_width: Option<f32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct TraceState {
    fill: Color,
    stroke: Color,
    font: FontSpec,
    align: TextAlign,
    // translate + uniform-axis scale, composed left to right
    tx: f32,
    ty: f32,
    sx: f32,
    sy: f32,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            font: FontSpec::default(),
            align: TextAlign::Left,
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }
}

/// A measuring, recording canvas with no pixels behind it.
///
/// Measurement is deterministic: every char is `unicode-width × (font size / 2)`
/// logical pixels, so an ASCII char at the default 14px font is 7px and a CJK
/// char is 14px. All draw calls are appended to an op log (coordinates already
/// passed through the current transform) that tests assert against.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    state: TraceState,
    stack: Vec<TraceState>,
}

impl TraceCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All recorded text ops, in paint order.
    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.state.tx + self.state.sx * x,
            self.state.ty + self.state.sy * y,
        )
    }
}

impl Canvas for TraceCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
        self.stack.clear();
        self.state = TraceState::default();
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.tx += self.state.sx * dx;
        self.state.ty += self.state.sy * dy;
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.sx *= sx;
        self.state.sy *= sy;
    }

    fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x, y) = self.point(x, y);
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width: width * self.state.sx,
            height: height * self.state.sy,
            color: self.state.fill,
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x, y) = self.point(x, y);
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width: width * self.state.sx,
            height: height * self.state.sy,
            color: self.state.stroke,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>) {
        let (x, y) = self.point(x, y);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align: self.state.align,
            font: self.state.font.clone(),
            color: self.state.fill,
            max_width: max_width.map(|w| w * self.state.sx),
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        let cells: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        cells as f32 * self.state.font.size * 0.5
    }
}
