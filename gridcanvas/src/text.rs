//! Word wrap, wrapped-height measurement, and ellipsis truncation.
//!
//! All measurement goes through the current font of the supplied [`Canvas`],
//! so callers set the cell font before wrapping.

use crate::canvas::Canvas;

pub const ELLIPSIS: &str = "…";

/// One wrapped output line and its measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub content: String,
    pub width: f32,
}

/// The result of wrapping a text run into a fixed-width box.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<WrappedLine>,
    pub total_height: f32,
}

/// Wraps `text` into lines no wider than `max_width`.
///
/// Explicit newlines are hard breaks; empty segments between them are
/// dropped. Each remaining segment is wrapped greedily by measuring growing
/// prefixes, always placing at least one char per line so an over-wide char
/// cannot loop. `max_width <= 0` is the degenerate unmeasurable case: the
/// whole text becomes a single line of height `line_height`.
pub fn wrap_text<C: Canvas + ?Sized>(
    canvas: &C,
    text: &str,
    max_width: f32,
    line_height: f32,
) -> WrappedText {
    if max_width <= 0.0 {
        return WrappedText {
            lines: vec![WrappedLine {
                content: text.to_string(),
                width: canvas.measure_text(text),
            }],
            total_height: line_height,
        };
    }

    let mut lines = Vec::new();
    for segment in text.split('\n').filter(|s| !s.is_empty()) {
        let mut current = String::new();
        for ch in segment.chars() {
            let mut candidate = current.clone();
            candidate.push(ch);
            if !current.is_empty() && canvas.measure_text(&candidate) > max_width {
                let width = canvas.measure_text(&current);
                lines.push(WrappedLine {
                    content: std::mem::take(&mut current),
                    width,
                });
                current.push(ch);
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            let width = canvas.measure_text(&current);
            lines.push(WrappedLine {
                content: current,
                width,
            });
        }
    }

    if lines.is_empty() {
        lines.push(WrappedLine {
            content: String::new(),
            width: 0.0,
        });
    }

    let total_height = lines.len() as f32 * line_height;
    WrappedText {
        lines,
        total_height,
    }
}

/// Wrapped height only; a measurement pass with no line allocation kept.
pub fn text_height<C: Canvas + ?Sized>(
    canvas: &C,
    text: &str,
    max_width: f32,
    line_height: f32,
) -> f32 {
    wrap_text(canvas, text, max_width, line_height).total_height
}

/// Truncates `text` to fit `max_width`, appending an ellipsis marker.
///
/// Returns the input unchanged when it already fits. Otherwise chars are
/// kept greedily while the prefix plus the marker still measures within
/// `max_width`; when not even one char fits the result is just the marker.
pub fn truncate_text<C: Canvas + ?Sized>(canvas: &C, text: &str, max_width: f32) -> String {
    if canvas.measure_text(text) <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    for ch in text.chars() {
        let mut candidate = result.clone();
        candidate.push(ch);
        candidate.push_str(ELLIPSIS);
        if canvas.measure_text(&candidate) > max_width {
            break;
        }
        result.push(ch);
    }
    result.push_str(ELLIPSIS);
    result
}
