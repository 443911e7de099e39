mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, ParseColorError};
pub use edges::Edges;
pub use enums::{Dimension, FontWeight, TextAlign, TextOverflow};
pub use style::{CellStyle, FontSpec, TableStyle, TitleStyle};
