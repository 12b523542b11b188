//! Direct pixel buffers.

use alloc::{vec, vec::Vec};
use core::fmt::{Debug, Formatter};

use crate::math::{Point2, Rgba, float::fp, pt2};
use crate::render::{LineSink, PixelSink};

use super::rect::Rect;

//
// Types
//

/// A 32-bit-per-pixel bitmap stored as a flat byte buffer.
///
/// Pixels are stored in row-major order with four bytes each, in
/// **B, G, R, A** order, such that pixel (x, y) starts at byte index
/// ```text
/// 4 * (bitmap.width() * y + x)
/// ```
/// The y axis points down.
///
/// All drawing methods clip: writes outside the bitmap are silently
/// ignored, and reads outside it return opaque black.
///
/// # Examples
/// ```
/// use morphx_core::{math::rgb, util::buf::Bitmap};
///
/// let mut bmp = Bitmap::new(4, 3);
/// bmp.set_pixel(1, 2, rgb(0x12, 0x34, 0x56));
/// assert_eq!(bmp.get_pixel(1, 2), rgb(0x12, 0x34, 0x56));
/// assert_eq!(&bmp.bytes()[36..40], &[0x56, 0x34, 0x12, 0xFF]);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Bitmap {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

//
// Inherent impls
//

impl Bitmap {
    /// Returns a new bitmap of the given size, filled with transparent black.
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h, data: vec![0; 4 * w * h] }
    }

    /// Returns the width of `self` in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }
    /// Returns the height of `self` in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }
    /// Returns the raw BGRA bytes of `self`.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
    /// Returns the raw BGRA bytes of `self`, mutably.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the color of the pixel at (`x`, `y`), or opaque black if
    /// the coordinates are out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgba {
        match self.offset(x, y) {
            Some(i) => {
                let [b, g, r, a] = [0, 1, 2, 3].map(|c| self.data[i + c]);
                Rgba([r, g, b, a])
            }
            None => Rgba::BLACK,
        }
    }

    /// Sets the pixel at (`x`, `y`) to `color`. Does nothing if the
    /// coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.offset(x, y) {
            let [r, g, b, a] = color.0;
            self.data[i..i + 4].copy_from_slice(&[b, g, r, a]);
        }
    }

    /// Sets the pixel at (`x`, `y`) to the opaque color `0x00RRGGBB`.
    /// The top byte of `rgb` is ignored.
    pub fn set_pixel_rgb(&mut self, x: i32, y: i32, rgb: u32) {
        self.set_pixel(x, y, Rgba::from_rgb_u32(rgb));
    }

    /// Fills all of `self` with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.0;
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[b, g, r, a]);
        }
    }

    /// Draws a one-pixel-wide line segment from (`x1`, `y1`) to
    /// (`x2`, `y2`).
    ///
    /// Steps along the segment in unit increments of distance, from 0 to
    /// the length rounded down, truncating each sample to pixel
    /// coordinates. Segments with non-finite coordinates draw nothing.
    pub fn draw_segment(
        &mut self,
        color: Rgba,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = fp::sqrt(dx * dx + dy * dy);
        if !len.is_finite() {
            return;
        }
        let a = fp::atan2(dy, dx);
        let (cos, sin) = (fp::cos(a), fp::sin(a));
        for r in 0..=len as u64 {
            let r = r as f64;
            let (x, y) = pt2(x1 + r * cos, y1 + r * sin).to_i32();
            self.set_pixel(x, y, color);
        }
    }

    /// Draws the closed outline through `pts`, joining the last point back
    /// to the first.
    pub fn draw_polygon(&mut self, color: Rgba, pts: &[Point2]) {
        let Some(&last) = pts.last() else {
            return;
        };
        let mut prev = last;
        for &p in pts {
            self.draw_segment(color, prev.x, prev.y, p.x, p.y);
            prev = p;
        }
    }

    /// Fills the pixels (x, y) with `left <= x < right` and
    /// `top <= y < bottom`, clipped to the bounds of `self`.
    pub fn fill_rect(&mut self, color: Rgba, rect: Rect<i32>) {
        let Some(r) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in r.top..r.bottom {
            for x in r.left..r.right {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Fills the ellipse inscribed in the box with top-left corner
    /// (`x`, `y`), width `w`, and height `h`.
    ///
    /// A pixel is filled if its center lies inside the ellipse. Boxes with
    /// zero, negative, or non-finite dimensions draw nothing.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::{math::Rgba, util::buf::Bitmap};
    ///
    /// let mut bmp = Bitmap::new(8, 8);
    /// bmp.fill_ellipse(Rgba::WHITE, 2.0, 2.0, 4.0, 4.0);
    /// assert_eq!(bmp.get_pixel(4, 4), Rgba::WHITE);
    /// assert_eq!(bmp.get_pixel(2, 2), Rgba::default());
    /// ```
    pub fn fill_ellipse(&mut self, color: Rgba, x: f64, y: f64, w: f64, h: f64) {
        let (rx, ry) = (w / 2.0, h / 2.0);
        if !(rx > 0.0 && ry > 0.0 && x.is_finite() && y.is_finite()) {
            return;
        }
        let (cx, cy) = (x + rx, y + ry);
        // Clamp to the bitmap before converting to integers
        let clamp_x = |v: f64| v.clamp(0.0, self.w as f64) as i32;
        let clamp_y = |v: f64| v.clamp(0.0, self.h as f64) as i32;
        let (x0, x1) = (clamp_x(x), clamp_x(fp::ceil(x + w)));
        let (y0, y1) = (clamp_y(y), clamp_y(fp::ceil(y + h)));

        for py in y0..y1 {
            let ny = (py as f64 + 0.5 - cy) / ry;
            for px in x0..x1 {
                let nx = (px as f64 + 0.5 - cx) / rx;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    /// Returns an iterator over the pixels of `self` as `0xAARRGGBB`
    /// values, in row-major order.
    pub fn argb_pixels(&self) -> impl Iterator<Item = u32> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
    }

    /// Returns the pixels of `self` as `0xAARRGGBB` values, in row-major
    /// order.
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.argb_pixels().collect()
    }

    fn bounds(&self) -> Rect<i32> {
        let w = i32::try_from(self.w).unwrap_or(i32::MAX);
        let h = i32::try_from(self.h).unwrap_or(i32::MAX);
        Rect { left: 0, top: 0, right: w, bottom: h }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.w)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.h)?;
        Some(4 * (self.w * y + x))
    }
}

//
// Trait impls
//

impl PixelSink for Bitmap {
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.set_pixel(x, y, color);
    }
}

impl LineSink for Bitmap {
    /// Draws a segment `width` pixels wide, rounded to the nearest whole
    /// pixel, as parallel one-pixel segments offset along the normal.
    fn draw_line(&mut self, p1: Point2, p2: Point2, color: Rgba, width: f32) {
        let n = fp::round_ties_even(f64::from(width)).max(1.0) as u32;
        if n == 1 {
            return self.draw_segment(color, p1.x, p1.y, p2.x, p2.y);
        }
        let a = fp::atan2(p2.y - p1.y, p2.x - p1.x);
        let (nx, ny) = (-fp::sin(a), fp::cos(a));
        let mid = f64::from(n - 1) / 2.0;
        for k in 0..n {
            let d = f64::from(k) - mid;
            let (p, q) = (p1.offset(d * nx, d * ny), p2.offset(d * nx, d * ny));
            self.draw_segment(color, p.x, p.y, q.x, q.y);
        }
    }
}

impl Debug for Bitmap {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{rgb, rgba};

    use super::*;

    const RED: Rgba = rgb(0xFF, 0, 0);

    fn count(bmp: &Bitmap, color: Rgba) -> usize {
        let (w, h) = (bmp.width() as i32, bmp.height() as i32);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| bmp.get_pixel(x, y) == color)
            .count()
    }

    #[test]
    fn new_is_transparent_black() {
        let bmp = Bitmap::new(3, 2);
        assert_eq!(bmp.bytes().len(), 24);
        assert!(bmp.bytes().iter().all(|&b| b == 0));
        assert_eq!(bmp.get_pixel(2, 1), Rgba::default());
    }

    #[test]
    fn pixels_are_stored_bgra() {
        let mut bmp = Bitmap::new(2, 2);
        bmp.set_pixel(1, 0, rgba(1, 2, 3, 4));
        assert_eq!(&bmp.bytes()[4..8], &[3, 2, 1, 4]);
        bmp.set_pixel_rgb(0, 1, 0xAB_10_20_30);
        assert_eq!(&bmp.bytes()[8..12], &[0x30, 0x20, 0x10, 0xFF]);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut bmp = Bitmap::new(2, 2);
        let before = bmp.clone();
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i32::MIN, i32::MAX)] {
            bmp.set_pixel(x, y, RED);
            assert_eq!(bmp.get_pixel(x, y), Rgba::BLACK);
        }
        assert_eq!(bmp, before);
    }

    #[test]
    fn clear_fills_everything() {
        let mut bmp = Bitmap::new(5, 4);
        bmp.clear(RED);
        assert_eq!(count(&bmp, RED), 20);
    }

    #[test]
    fn horizontal_segment() {
        let mut bmp = Bitmap::new(10, 3);
        bmp.draw_segment(RED, 1.0, 1.0, 6.0, 1.0);
        for x in 1..=6 {
            assert_eq!(bmp.get_pixel(x, 1), RED, "x = {x}");
        }
        assert_eq!(count(&bmp, RED), 6);
    }

    #[test]
    fn vertical_segment_truncates_samples() {
        let mut bmp = Bitmap::new(3, 10);
        bmp.draw_segment(RED, 1.5, 0.0, 1.5, 4.5);
        for y in 0..=4 {
            assert_eq!(bmp.get_pixel(1, y), RED, "y = {y}");
        }
        assert_eq!(count(&bmp, RED), 5);
    }

    #[test]
    fn zero_length_segment_plots_start() {
        let mut bmp = Bitmap::new(3, 3);
        bmp.draw_segment(RED, 2.0, 1.0, 2.0, 1.0);
        assert_eq!(bmp.get_pixel(2, 1), RED);
        assert_eq!(count(&bmp, RED), 1);
    }

    #[test]
    fn non_finite_segment_draws_nothing() {
        let mut bmp = Bitmap::new(3, 3);
        bmp.draw_segment(RED, 0.0, 0.0, f64::INFINITY, 1.0);
        bmp.draw_segment(RED, f64::NAN, 0.0, 1.0, 1.0);
        assert_eq!(count(&bmp, RED), 0);
    }

    #[test]
    fn clipped_segment() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.draw_segment(RED, -10.0, 2.0, 10.0, 2.0);
        assert_eq!(count(&bmp, RED), 4);
    }

    #[test]
    fn polygon_outline_is_closed() {
        let mut bmp = Bitmap::new(8, 8);
        let sq = [pt2(1.0, 1.0), pt2(5.0, 1.0), pt2(5.0, 5.0), pt2(1.0, 5.0)];
        bmp.draw_polygon(RED, &sq);
        for i in 1..=5 {
            assert_eq!(bmp.get_pixel(i, 1), RED);
            assert_eq!(bmp.get_pixel(1, i), RED);
        }
        assert_eq!(bmp.get_pixel(3, 3), Rgba::default());
        bmp.draw_polygon(RED, &[]);
    }

    #[test]
    fn fill_rect_fills_half_open_range() {
        let mut bmp = Bitmap::new(6, 6);
        bmp.fill_rect(RED, Rect::from_origin_size(1, 2, 3, 2));
        assert_eq!(count(&bmp, RED), 6);
        assert_eq!(bmp.get_pixel(1, 2), RED);
        assert_eq!(bmp.get_pixel(3, 3), RED);
        assert_eq!(bmp.get_pixel(4, 3), Rgba::default());
        assert_eq!(bmp.get_pixel(3, 4), Rgba::default());
    }

    #[test]
    fn fill_rect_clips() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.fill_rect(RED, Rect { left: -5, top: 2, right: 100, bottom: 100 });
        assert_eq!(count(&bmp, RED), 8);
        bmp.fill_rect(RED, Rect::from_origin_size(10, 10, 2, 2));
        assert_eq!(count(&bmp, RED), 8);
    }

    #[test]
    fn ellipse_is_symmetric() {
        let mut bmp = Bitmap::new(12, 12);
        bmp.fill_ellipse(RED, 1.0, 1.0, 10.0, 6.0);
        let n = count(&bmp, RED);
        assert!(n > 0 && n < 60, "filled {n} pixels");
        for y in 0..12 {
            for x in 0..12 {
                let mirror = bmp.get_pixel(11 - x, 7 - y);
                if (1..7).contains(&y) {
                    assert_eq!(bmp.get_pixel(x, y), mirror, "({x}, {y})");
                }
            }
        }
        // corners of the bounding box stay empty
        assert_eq!(bmp.get_pixel(1, 1), Rgba::default());
        assert_eq!(bmp.get_pixel(10, 6), Rgba::default());
        assert_eq!(bmp.get_pixel(6, 4), RED);
    }

    #[test]
    fn degenerate_ellipse_draws_nothing() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.fill_ellipse(RED, 1.0, 1.0, 0.0, 2.0);
        bmp.fill_ellipse(RED, 1.0, 1.0, -2.0, 2.0);
        bmp.fill_ellipse(RED, f64::NAN, 1.0, 2.0, 2.0);
        assert_eq!(count(&bmp, RED), 0);
    }

    #[test]
    fn ellipse_partly_outside() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.fill_ellipse(RED, -2.0, -2.0, 4.0, 4.0);
        assert_eq!(bmp.get_pixel(0, 0), RED);
        assert_eq!(bmp.get_pixel(3, 3), Rgba::default());
    }

    #[test]
    fn wide_line_draws_parallel_strokes() {
        let mut bmp = Bitmap::new(10, 10);
        bmp.draw_line(pt2(1.0, 5.0), pt2(8.0, 5.0), RED, 3.0);
        for y in 4..=6 {
            assert_eq!(bmp.get_pixel(4, y), RED, "y = {y}");
        }
        assert_eq!(bmp.get_pixel(4, 3), Rgba::default());
        assert_eq!(bmp.get_pixel(4, 7), Rgba::default());
    }

    #[test]
    fn thin_line_is_one_stroke() {
        let mut bmp = Bitmap::new(10, 10);
        bmp.draw_line(pt2(0.0, 0.0), pt2(9.0, 0.0), RED, 0.2);
        assert_eq!(count(&bmp, RED), 10);
    }

    #[test]
    fn argb_output() {
        let mut bmp = Bitmap::new(2, 1);
        bmp.set_pixel(0, 0, rgba(0x11, 0x22, 0x33, 0x44));
        bmp.set_pixel(1, 0, Rgba::WHITE);
        assert_eq!(bmp.to_argb_u32(), [0x44112233, 0xFFFFFFFF]);
    }

    #[test]
    fn pixel_sink() {
        let mut bmp = Bitmap::new(2, 2);
        {
            let sink: &mut dyn PixelSink = &mut bmp;
            sink.put_pixel(1, 1, RED);
            sink.put_pixel(5, 5, RED);
        }
        assert_eq!(bmp.get_pixel(1, 1), RED);
    }
}
