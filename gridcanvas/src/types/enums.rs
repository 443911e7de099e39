/// Horizontal anchor for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How body-cell text behaves when it exceeds the cell width.
///
/// `Wrap` drives the row height from the wrapped line count; `Ellipsis` keeps
/// the cell single-line and truncates with an ellipsis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOverflow {
    #[default]
    Wrap,
    Ellipsis,
}

/// A requested canvas dimension: sized to content, or fixed in pixels with
/// scale-to-fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    #[default]
    Auto,
    Fixed(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}
