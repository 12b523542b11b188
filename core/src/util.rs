//! Rectangles and the direct pixel bitmap.

pub mod buf;
pub mod rect;
