pub mod canvas;
pub mod cell;
pub mod column;
pub mod layout;
pub mod render;
pub mod row;
pub mod table;
pub mod text;
pub mod types;

pub use canvas::{Canvas, CanvasError, DrawOp, RasterCanvas, TraceCanvas};
pub use cell::{CellInfo, CellOutput, CellRenderer, ResolvedCell};
pub use column::{ColumnSpec, ColumnTree, ResolvedColumn};
pub use layout::Rect;
pub use row::{Row, Value};
pub use table::{Table, TableOptions};
pub use types::*;
