//! The paint pass.
//!
//! Free functions that draw one part of the table each, all in logical
//! pixels against a [`Canvas`] whose transform the caller has already set.
//! The header paints in absolute table coordinates; body rows paint with the
//! origin translated to the row's top-left corner.

use crate::canvas::Canvas;
use crate::cell::{resolve_cell, span_height};
use crate::column::ColumnTree;
use crate::layout::Rect;
use crate::row::Row;
use crate::text::{truncate_text, wrap_text};
use crate::types::{Color, FontSpec, FontWeight, TableStyle, TextAlign, TextOverflow, TitleStyle};

/// Paints the whole header band with its top-left corner at `(left, top)`.
pub fn paint_header<C: Canvas + ?Sized>(canvas: &mut C, tree: &ColumnTree, left: f32, top: f32) {
    let mut x = left;
    for &root in tree.roots() {
        canvas.save();
        canvas.translate(x, top);
        paint_header_cell(canvas, tree, root, 0.0, 0.0);
        canvas.restore();
        x += tree.node(root).width;
    }
}

/// Paints one header cell and recurses into its children below it.
fn paint_header_cell<C: Canvas + ?Sized>(
    canvas: &mut C,
    tree: &ColumnTree,
    index: usize,
    x: f32,
    y: f32,
) {
    let col = tree.node(index);
    let width = col.width;
    let height = col.height;

    canvas.save();
    canvas.set_stroke(col.style.border_color);
    canvas.set_fill(col.style.header_bg);
    canvas.fill_rect(x, y, width, height);
    canvas.stroke_rect(x, y, width, height);
    canvas.restore();

    canvas.save();
    canvas.set_fill(col.style.title_color);
    canvas.set_font(col.style.title_font.clone());
    let mid_y = y + 0.5 * height;
    // Group headers center over their leaf span regardless of alignment.
    if !col.children.is_empty() || col.style.text_align == TextAlign::Center {
        canvas.set_text_align(TextAlign::Center);
        canvas.fill_text(&col.title, x + 0.5 * width, mid_y, Some(col.text_width));
    } else if col.style.text_align == TextAlign::Right {
        canvas.set_text_align(TextAlign::Right);
        canvas.fill_text(
            &col.title,
            x + width - col.style.padding.right,
            mid_y,
            Some(col.text_width),
        );
    } else {
        canvas.set_text_align(TextAlign::Left);
        canvas.fill_text(
            &col.title,
            x + col.style.padding.left,
            mid_y,
            Some(col.text_width),
        );
    }
    canvas.restore();

    let mut child_x = x;
    let child_y = y + height;
    for &child in &col.children {
        paint_header_cell(canvas, tree, child, child_x, child_y);
        child_x += tree.node(child).width;
    }
}

/// Paints one body row with the canvas origin at the row's top-left corner.
///
/// The cursor always advances by the column's nominal width; column spans
/// widen the painted cell without moving the cursor further, matching how
/// spanned-over neighbors resolve to empty cells. A zero or negative span
/// paints nothing but still advances.
pub fn paint_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: &Row,
    index: usize,
    tree: &ColumnTree,
    heights: &[f32],
    style: &TableStyle,
) {
    let line_height = style.body_line_height();
    let mut x = 0.0;
    for &leaf in tree.leaves() {
        let col = tree.node(leaf);
        let cell = resolve_cell(
            col.renderer.as_ref(),
            col.data_index.as_deref(),
            row,
            index,
        );
        let width = col.width * cell.col_span.max(0) as f32;
        let height = span_height(heights, index, cell.row_span);

        if width > 0.0 && height > 0.0 {
            canvas.save();
            canvas.set_stroke(col.style.border_color);
            canvas.stroke_rect(x, 0.0, width, height);
            canvas.restore();

            if !cell.text.is_empty() {
                canvas.save();
                canvas.set_font(FontSpec {
                    size: cell.font_size.unwrap_or(col.style.text_font.size),
                    weight: cell.font_weight.unwrap_or(col.style.text_font.weight),
                    family: col.style.text_font.family.clone(),
                });
                let text_box = width - col.style.padding.left - col.style.padding.right;
                let text = if col.style.overflow == TextOverflow::Ellipsis {
                    truncate_text(canvas, &cell.text, text_box)
                } else {
                    cell.text.clone()
                };
                let wrapped = wrap_text(canvas, &text, text_box, line_height);
                let max_text_height = height - col.style.padding.vertical_total();
                canvas.translate(
                    x + col.style.padding.left,
                    col.style.padding.top + (max_text_height - wrapped.total_height) / 2.0,
                );
                canvas.set_fill(cell.text_color.unwrap_or(col.style.text_color));
                canvas.set_text_align(col.style.text_align);
                for (i, line) in wrapped.lines.iter().enumerate() {
                    let line_y = i as f32 * line_height + line_height / 2.0;
                    let anchor = match col.style.text_align {
                        TextAlign::Center => text_box * 0.5,
                        TextAlign::Right => text_box,
                        TextAlign::Left => 0.0,
                    };
                    canvas.fill_text(&line.content, anchor, line_y, None);
                }
                canvas.restore();
            }
        }
        x += col.width;
    }
}

/// Paints the empty-state placeholder in the given box below the header.
pub fn paint_empty<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, border_color: Color) {
    log::debug!("painting empty placeholder at {area:?}");
    canvas.save();
    canvas.set_stroke(border_color);
    canvas.stroke_rect(area.x, area.y, area.width, area.height);
    canvas.set_fill(Color::rgb(153, 153, 153));
    canvas.set_text_align(TextAlign::Center);
    canvas.fill_text(
        "Empty Data!",
        area.x + 0.5 * area.width,
        area.y + 0.5 * area.height,
        Some(area.width),
    );
    canvas.restore();
}

/// Paints the title line centered in the band above the table. `width` is
/// the full logical canvas width and `left`/`right`/`top` are the outer
/// paddings around the table area.
#[allow(clippy::too_many_arguments)]
pub fn paint_title<C: Canvas + ?Sized>(
    canvas: &mut C,
    title: &str,
    title_style: &TitleStyle,
    style: &TableStyle,
    left: f32,
    right: f32,
    top: f32,
    width: f32,
    table_width: f32,
) {
    canvas.save();
    canvas.set_font(FontSpec {
        size: title_style.font_size.unwrap_or(style.font_size),
        weight: FontWeight::Bold,
        family: title_style
            .font_family
            .clone()
            .unwrap_or_else(|| style.font_family.clone()),
    });
    canvas.set_fill(title_style.color.unwrap_or(style.color));
    canvas.set_text_align(title_style.text_align);
    let band = title_style.line_height + style.cell_padding.vertical_total();
    let mid_y = top - band * 0.5;
    let x = match title_style.text_align {
        TextAlign::Center => 0.5 * width,
        TextAlign::Right => width - right,
        TextAlign::Left => left,
    };
    canvas.fill_text(title, x, mid_y, Some(table_width));
    canvas.restore();
}
