//! Per-cell content resolution.
//!
//! A column may carry a renderer that maps a row's field value to richer
//! cell output, including row and column spans and per-cell font or color
//! overrides. [`resolve_cell`] collapses renderer, template, and plain
//! field lookup into one [`ResolvedCell`] the layout and paint passes
//! share.

use std::fmt;

use crate::row::{Row, Value};
use crate::types::{Color, FontWeight};

/// Closure form of a cell renderer. Receives the field value, the whole
/// row, and the zero-based row index.
pub type RenderFn = Box<dyn Fn(&Value, &Row, usize) -> CellOutput>;

/// How a column turns row data into cell content.
pub enum CellRenderer {
    /// A literal template; every `{c}` is replaced by the field's text.
    Template(String),
    /// A computed renderer.
    Compute(RenderFn),
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRenderer::Template(t) => f.debug_tuple("Template").field(t).finish(),
            CellRenderer::Compute(_) => f.debug_tuple("Compute").field(&"<fn>").finish(),
        }
    }
}

/// Rich cell content with span and style overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct CellInfo {
    pub text: Option<String>,
    pub row_span: i32,
    pub col_span: i32,
    pub text_color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
}

impl Default for CellInfo {
    fn default() -> Self {
        Self {
            text: None,
            row_span: 1,
            col_span: 1,
            text_color: None,
            font_size: None,
            font_weight: None,
        }
    }
}

impl CellInfo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn row_span(mut self, span: i32) -> Self {
        self.row_span = span;
        self
    }

    pub fn col_span(mut self, span: i32) -> Self {
        self.col_span = span;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }
}

/// What a [`CellRenderer::Compute`] closure returns.
#[derive(Debug)]
pub enum CellOutput {
    /// No content; the cell paints as an empty box with default spans.
    Empty,
    Text(String),
    Cell(CellInfo),
}

impl From<String> for CellOutput {
    fn from(s: String) -> Self {
        CellOutput::Text(s)
    }
}

impl From<&str> for CellOutput {
    fn from(s: &str) -> Self {
        CellOutput::Text(s.to_string())
    }
}

impl From<CellInfo> for CellOutput {
    fn from(info: CellInfo) -> Self {
        CellOutput::Cell(info)
    }
}

/// A fully resolved cell, ready to measure and paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub text: String,
    pub row_span: i32,
    pub col_span: i32,
    pub text_color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
}

impl Default for ResolvedCell {
    fn default() -> Self {
        Self {
            text: String::new(),
            row_span: 1,
            col_span: 1,
            text_color: None,
            font_size: None,
            font_weight: None,
        }
    }
}

/// Resolves one cell for a leaf column against a row.
pub fn resolve_cell(
    renderer: Option<&CellRenderer>,
    data_index: Option<&str>,
    row: &Row,
    index: usize,
) -> ResolvedCell {
    match renderer {
        Some(CellRenderer::Template(template)) => {
            let replacement = match data_index {
                Some(key) => row.field_text(key),
                None => String::new(),
            };
            ResolvedCell {
                text: template.replace("{c}", &replacement),
                ..ResolvedCell::default()
            }
        }
        Some(CellRenderer::Compute(f)) => {
            let null = Value::Null;
            let value = data_index.and_then(|key| row.get(key)).unwrap_or(&null);
            match f(value, row, index) {
                CellOutput::Empty => ResolvedCell::default(),
                CellOutput::Text(text) => ResolvedCell {
                    text,
                    ..ResolvedCell::default()
                },
                CellOutput::Cell(info) => ResolvedCell {
                    text: info.text.unwrap_or_default(),
                    row_span: info.row_span,
                    col_span: info.col_span,
                    text_color: info.text_color,
                    font_size: info.font_size,
                    font_weight: info.font_weight,
                },
            }
        }
        None => ResolvedCell {
            text: data_index.map(|key| row.field_text(key)).unwrap_or_default(),
            ..ResolvedCell::default()
        },
    }
}

/// Sums row heights covered by a vertical span starting at `index`.
///
/// Spans of zero or less cover nothing; indices past the end of `heights`
/// contribute nothing.
pub fn span_height(heights: &[f32], index: usize, row_span: i32) -> f32 {
    if row_span <= 0 {
        return 0.0;
    }
    heights
        .iter()
        .skip(index)
        .take(row_span as usize)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_field() {
        let row = Row::new().set("name", "Ada");
        let cell = resolve_cell(None, Some("name"), &row, 0);
        assert_eq!(cell.text, "Ada");
        assert_eq!(cell.row_span, 1);
    }

    #[test]
    fn test_resolve_missing_field_is_empty() {
        let row = Row::new();
        let cell = resolve_cell(None, Some("name"), &row, 0);
        assert_eq!(cell.text, "");
    }

    #[test]
    fn test_resolve_template() {
        let row = Row::new().set("weight", 52);
        let renderer = CellRenderer::Template("{c}kg".to_string());
        let cell = resolve_cell(Some(&renderer), Some("weight"), &row, 0);
        assert_eq!(cell.text, "52kg");
    }

    #[test]
    fn test_resolve_compute_with_spans() {
        let row = Row::new().set("first", "Grace");
        let renderer = CellRenderer::Compute(Box::new(|value, _row, index| {
            if index == 0 {
                CellInfo::new(value.as_text()).row_span(2).into()
            } else {
                CellOutput::Empty
            }
        }));
        let cell = resolve_cell(Some(&renderer), Some("first"), &row, 0);
        assert_eq!(cell.text, "Grace");
        assert_eq!(cell.row_span, 2);
        let blank = resolve_cell(Some(&renderer), Some("first"), &row, 1);
        assert_eq!(blank.text, "");
        assert_eq!(blank.row_span, 1);
    }

    #[test]
    fn test_span_height_sums_and_clips() {
        let heights = [40.0, 50.0, 60.0];
        assert_eq!(span_height(&heights, 0, 2), 90.0);
        assert_eq!(span_height(&heights, 2, 5), 60.0);
        assert_eq!(span_height(&heights, 1, 0), 0.0);
        assert_eq!(span_height(&heights, 1, -3), 0.0);
    }
}
