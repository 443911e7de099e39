//! The table itself: options, geometry, and the full render cycle.

use crate::canvas::Canvas;
use crate::column::{ColumnSpec, ColumnTree};
use crate::layout::{body_height, Rect};
use crate::render::{paint_empty, paint_header, paint_row, paint_title};
use crate::row::Row;
use crate::types::{Color, Dimension, Edges, FontSpec, FontWeight, TableStyle, TitleStyle};

/// Everything a [`Table`] is built from. All fields have usable defaults
/// except `columns`, which an empty table may also omit.
#[derive(Debug, Default)]
pub struct TableOptions {
    /// Outer padding around the table area. The top grows by one title band
    /// when a title is set.
    pub padding: Option<Edges>,
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<Row>,
    /// Target canvas width; `Auto` follows the table's natural size.
    pub width: Dimension,
    /// Target canvas height; `Auto` follows the table's natural size.
    pub height: Dimension,
    /// Background fill for the whole canvas. `None` leaves it transparent.
    pub bg_color: Option<Color>,
    pub title: Option<String>,
    pub title_style: TitleStyle,
    pub style: TableStyle,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: impl Into<Edges>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns = columns;
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.data.push(row);
        self
    }

    pub fn data(mut self, data: Vec<Row>) -> Self {
        self.data = data;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Dimension::Fixed(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Dimension::Fixed(height);
        self
    }

    pub fn bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_style(mut self, style: TitleStyle) -> Self {
        self.title_style = style;
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }
}

/// A table bound to a canvas. Construction runs a full measure and paint;
/// [`append_rows`](Table::append_rows) re-runs both over the grown data set.
pub struct Table<C: Canvas> {
    canvas: C,
    tree: ColumnTree,
    data: Vec<Row>,
    style: TableStyle,
    title: Option<String>,
    title_style: TitleStyle,
    bg_color: Option<Color>,
    padding: Edges,
    width: Dimension,
    height: Dimension,
    row_heights: Vec<f32>,
    table_width: f32,
    table_height: f32,
    head_height: f32,
    scale: f32,
}

impl<C: Canvas> Table<C> {
    pub fn new(canvas: C, options: TableOptions) -> Self {
        let tree = ColumnTree::build(options.columns, &options.style);
        let mut padding = options.padding.unwrap_or_else(|| Edges::all(10.0));
        if options.title.is_some() {
            padding.top +=
                options.title_style.line_height + options.style.cell_padding.vertical_total();
        }
        let mut table = Self {
            canvas,
            tree,
            data: options.data,
            style: options.style,
            title: options.title,
            title_style: options.title_style,
            bg_color: options.bg_color,
            padding,
            width: options.width,
            height: options.height,
            row_heights: Vec::new(),
            table_width: 0.0,
            table_height: 0.0,
            head_height: 0.0,
            scale: 1.0,
        };
        table.render();
        table
    }

    /// Appends rows and repaints. A no-op for an empty slice, leaving the
    /// canvas untouched.
    pub fn append_rows(&mut self, rows: Vec<Row>) {
        if rows.is_empty() {
            return;
        }
        self.data.extend(rows);
        self.render();
    }

    /// Full measure and paint cycle.
    ///
    /// Row heights are remeasured from scratch each time: a spanned cell's
    /// overflow can redistribute when later rows arrive, so cached heights
    /// would go stale.
    fn render(&mut self) {
        let nominal = self.style.resolved_row_height();
        let header_row = self.style.resolved_header_row_height();
        let (heights, body) = body_height(&mut self.canvas, &self.data, &self.tree, &self.style);
        self.row_heights = heights;
        self.table_width = self.tree.table_width();
        self.head_height = self.tree.header_height(header_row);
        self.table_height = body + self.head_height;

        let natural_w = self.table_width + self.padding.horizontal_total();
        let natural_h = self.table_height + self.padding.vertical_total();
        self.scale = fit_scale(self.width, self.height, natural_w, natural_h);
        log::debug!(
            "render: natural {natural_w}x{natural_h}, scale {}, {} rows",
            self.scale,
            self.data.len()
        );

        self.canvas.resize(
            (natural_w * self.scale).ceil() as u32,
            (natural_h * self.scale).ceil() as u32,
        );
        self.canvas.scale(self.scale, self.scale);

        // Base paint state; localized changes bracket it with save/restore.
        self.canvas.set_font(FontSpec {
            size: self.style.font_size,
            weight: FontWeight::Normal,
            family: self.style.font_family.clone(),
        });
        self.canvas.set_fill(self.style.color);
        self.canvas.set_stroke(self.style.color);
        self.canvas.set_text_align(self.style.text_align);

        let left = self.padding.left;
        let top = self.padding.top;

        if let Some(bg) = self.bg_color {
            self.canvas.save();
            self.canvas.set_fill(bg);
            self.canvas.fill_rect(0.0, 0.0, natural_w, natural_h);
            self.canvas.restore();
        }
        if let Some(background) = self.style.background {
            self.canvas.save();
            self.canvas.set_fill(background);
            self.canvas
                .fill_rect(left, top, self.table_width, self.table_height);
            self.canvas.restore();
        }

        paint_header(&mut self.canvas, &self.tree, left, top);

        if self.data.is_empty() {
            if self.table_width > 0.0 {
                paint_empty(
                    &mut self.canvas,
                    Rect::new(left, top + self.head_height, self.table_width, nominal * 2.0),
                    self.style.border_color,
                );
            }
        } else {
            self.canvas.save();
            self.canvas.translate(left, top + self.head_height);
            for (i, row) in self.data.iter().enumerate() {
                paint_row(
                    &mut self.canvas,
                    row,
                    i,
                    &self.tree,
                    &self.row_heights,
                    &self.style,
                );
                self.canvas.translate(0.0, self.row_heights[i]);
            }
            self.canvas.restore();
        }

        if let Some(title) = &self.title {
            paint_title(
                &mut self.canvas,
                title,
                &self.title_style,
                &self.style,
                left,
                self.padding.right,
                top,
                natural_w,
                self.table_width,
            );
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    /// Measured height of each body row, in order.
    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }

    /// Table area width, outer padding excluded.
    pub fn table_width(&self) -> f32 {
        self.table_width
    }

    /// Header plus body height, outer padding excluded.
    pub fn table_height(&self) -> f32 {
        self.table_height
    }

    pub fn head_height(&self) -> f32 {
        self.head_height
    }

    /// The shrink factor applied to fit fixed dimensions, at most 1.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Shrink-to-fit factor for the requested dimensions. Never enlarges; an
/// unconstrained or degenerate request paints at natural size.
fn fit_scale(width: Dimension, height: Dimension, natural_w: f32, natural_h: f32) -> f32 {
    let ratio = match (width, height) {
        (Dimension::Auto, Dimension::Auto) => 1.0,
        (Dimension::Fixed(w), Dimension::Auto) => natural_w / w,
        (Dimension::Auto, Dimension::Fixed(h)) => natural_h / h,
        (Dimension::Fixed(w), Dimension::Fixed(h)) => (natural_w / w).max(natural_h / h),
    };
    if !ratio.is_finite() || ratio <= 0.0 {
        return 1.0;
    }
    (1.0 / ratio).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_auto_is_one() {
        assert_eq!(fit_scale(Dimension::Auto, Dimension::Auto, 800.0, 600.0), 1.0);
    }

    #[test]
    fn test_fit_scale_shrinks_to_fixed_width() {
        assert_eq!(
            fit_scale(Dimension::Fixed(400.0), Dimension::Auto, 800.0, 600.0),
            0.5
        );
    }

    #[test]
    fn test_fit_scale_never_enlarges() {
        assert_eq!(
            fit_scale(Dimension::Fixed(1600.0), Dimension::Auto, 800.0, 600.0),
            1.0
        );
    }

    #[test]
    fn test_fit_scale_takes_tighter_axis() {
        assert_eq!(
            fit_scale(
                Dimension::Fixed(400.0),
                Dimension::Fixed(150.0),
                800.0,
                600.0
            ),
            0.25
        );
    }

    #[test]
    fn test_fit_scale_degenerate_dimension() {
        assert_eq!(fit_scale(Dimension::Fixed(0.0), Dimension::Auto, 800.0, 600.0), 1.0);
    }
}
