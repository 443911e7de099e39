//! Body row height measurement.
//!
//! Row heights depend on text wrapping, which depends on fonts, so
//! measurement runs against the same [`Canvas`] that will paint. The
//! measurement pass sets fonts on the canvas but draws nothing.

use crate::canvas::Canvas;
use crate::cell::resolve_cell;
use crate::column::ColumnTree;
use crate::text::text_height;
use crate::types::{FontSpec, TableStyle};

/// Measures the height of one body row.
///
/// Each leaf column proposes a candidate height and the row takes the
/// maximum. Ellipsis columns never wrap, so they propose the nominal row
/// height. Cells spanning multiple rows propose their wrapped height, less
/// the rows the span will cover when the text overflows them, so the extra
/// height lands on the anchor row exactly once. Cells with a zero or
/// negative span propose nothing; if every column is excluded the row falls
/// back to the nominal height.
pub fn row_height<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: &crate::row::Row,
    index: usize,
    tree: &ColumnTree,
    style: &TableStyle,
) -> f32 {
    let nominal = style.resolved_row_height();
    let line_height = style.body_line_height();
    let mut best: Option<f32> = None;

    for &leaf in tree.leaves() {
        let col = tree.node(leaf);
        if col.style.overflow == crate::types::TextOverflow::Ellipsis {
            best = Some(best.unwrap_or(0.0).max(nominal));
            continue;
        }
        let cell = resolve_cell(
            col.renderer.as_ref(),
            col.data_index.as_deref(),
            row,
            index,
        );
        if cell.row_span <= 0 || cell.col_span <= 0 {
            continue;
        }

        canvas.set_font(FontSpec {
            size: cell.font_size.unwrap_or(col.style.text_font.size),
            weight: cell.font_weight.unwrap_or(col.style.text_font.weight),
            family: col.style.text_font.family.clone(),
        });

        let width = col.width * cell.col_span as f32;
        let text_box = width - col.style.padding.left - col.style.padding.right;
        let mut candidate = text_height(canvas, &cell.text, text_box, line_height)
            + col.style.padding.vertical_total();
        if cell.row_span > 1 && candidate > cell.row_span as f32 * nominal {
            candidate -= (cell.row_span - 1) as f32 * nominal;
        }
        best = Some(best.unwrap_or(0.0).max(candidate));
    }

    best.unwrap_or(nominal)
}

/// Measures every body row. Returns the per-row heights and the total body
/// height. An empty data set reserves two nominal rows for the empty-state
/// placeholder.
pub fn body_height<C: Canvas + ?Sized>(
    canvas: &mut C,
    rows: &[crate::row::Row],
    tree: &ColumnTree,
    style: &TableStyle,
) -> (Vec<f32>, f32) {
    if rows.is_empty() {
        return (Vec::new(), style.resolved_row_height() * 2.0);
    }
    let heights: Vec<f32> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row_height(canvas, row, i, tree, style))
        .collect();
    let total = heights.iter().sum();
    log::debug!("measured {} body rows, total height {total}", heights.len());
    (heights, total)
}
