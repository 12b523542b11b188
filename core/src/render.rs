//! Drawing targets.
//!
//! The geometry and color code never touches pixel storage directly. It
//! draws through one of the sink traits below, implemented by
//! [`Bitmap`][crate::util::buf::Bitmap] and easy to implement for any other
//! target, such as a recorder in tests.

use crate::math::{Point2, Rgba};

/// A target that individual pixels can be written to.
pub trait PixelSink {
    /// Writes `color` to the pixel at (`x`, `y`).
    ///
    /// Implementations must silently ignore coordinates outside the target
    /// rather than panic.
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba);
}

/// A target that line segments can be drawn on.
pub trait LineSink {
    /// Draws a line segment from `p1` to `p2` with the given color and
    /// stroke width in pixels.
    ///
    /// Non-finite endpoints are the caller's problem; implementations may
    /// draw nothing or clip arbitrarily in that case.
    fn draw_line(&mut self, p1: Point2, p2: Point2, color: Rgba, width: f32);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        (**self).put_pixel(x, y, color);
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn draw_line(&mut self, p1: Point2, p2: Point2, color: Rgba, width: f32) {
        (**self).draw_line(p1, p2, color, width);
    }
}
