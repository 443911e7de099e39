//! Geometry and row measurement.

pub mod rect;
pub mod rows;

pub use rect::Rect;
pub use rows::{body_height, row_height};
