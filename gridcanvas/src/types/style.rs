use super::{Color, Edges, FontWeight, TextAlign, TextOverflow};

/// A font selection for measurement and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
    pub family: String,
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            family: String::from("sans-serif"),
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            family: String::from("sans-serif"),
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// Table-wide style defaults. Per-column overrides live on `ColumnSpec` and
/// are merged into a [`CellStyle`] once when the column tree is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Width of a leaf column without an explicit width.
    pub column_width: f32,
    /// Explicit body row height; defaults to `line_height` plus vertical cell
    /// padding.
    pub row_height: Option<f32>,
    /// Explicit header band unit height; defaults to the body row height.
    pub header_row_height: Option<f32>,
    /// Height of one wrapped body text line.
    pub line_height: f32,
    pub border_color: Color,
    pub text_align: TextAlign,
    /// Default text color for both header titles and body cells.
    pub color: Color,
    pub font_size: f32,
    pub font_family: String,
    pub header_bg_color: Color,
    pub cell_padding: Edges,
    /// Background fill behind the table area (not the whole canvas).
    pub background: Option<Color>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            column_width: 150.0,
            row_height: None,
            header_row_height: None,
            line_height: 22.0,
            border_color: Color::rgb(232, 232, 232),
            text_align: TextAlign::Left,
            color: Color::rgba(0, 0, 0, 217),
            font_size: 14.0,
            font_family: String::from("sans-serif"),
            header_bg_color: Color::rgba(0, 0, 0, 5),
            cell_padding: Edges::all(8.0),
            background: None,
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_width(mut self, width: f32) -> Self {
        self.column_width = width;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = Some(height);
        self
    }

    pub fn header_row_height(mut self, height: f32) -> Self {
        self.header_row_height = Some(height);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn header_bg_color(mut self, color: Color) -> Self {
        self.header_bg_color = color;
        self
    }

    pub fn cell_padding(mut self, padding: impl Into<Edges>) -> Self {
        self.cell_padding = padding.into();
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Nominal height of one body row.
    pub fn resolved_row_height(&self) -> f32 {
        self.row_height
            .unwrap_or(self.line_height + self.cell_padding.vertical_total())
    }

    /// Height of one header band row.
    pub fn resolved_header_row_height(&self) -> f32 {
        self.header_row_height.unwrap_or_else(|| self.resolved_row_height())
    }

    /// Line unit used for wrapping and painting body text. Kept consistent
    /// between measurement and painting so centering is exact.
    pub fn body_line_height(&self) -> f32 {
        self.resolved_row_height() - self.cell_padding.vertical_total()
    }
}

/// Style of the optional title band above the table. Unset fields inherit
/// from [`TableStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub text_align: TextAlign,
    pub line_height: f32,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            color: None,
            font_size: None,
            font_family: None,
            text_align: TextAlign::Center,
            line_height: 22.0,
        }
    }
}

impl TitleStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }
}

/// The effective style of one resolved column: table defaults with the
/// column's own overrides already applied. Computed once at tree build and
/// never re-derived during painting.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub text_align: TextAlign,
    pub title_color: Color,
    pub title_font: FontSpec,
    pub text_color: Color,
    pub text_font: FontSpec,
    pub border_color: Color,
    pub header_bg: Color,
    pub overflow: TextOverflow,
    pub padding: Edges,
}
