//! Axis-aligned rectangular regions.

use core::ops::{Add, Sub};

/// An axis-aligned rectangle given by its four edges.
///
/// The y axis points down: `top <= bottom` for a non-empty rectangle.
/// Whether the right and bottom edges count as inside depends on the query;
/// see [`contains`][Self::contains] and [`contains_exclusive`][Self::contains_exclusive].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect<T = f64> {
    /// The left bound of `self`.
    pub left: T,
    /// The top bound of `self`.
    pub top: T,
    /// The right bound of `self`.
    pub right: T,
    /// The bottom bound of `self`.
    pub bottom: T,
}

impl<T: Copy> Rect<T> {
    /// Returns the rectangle with top-left corner (`x`, `y`) and the given
    /// width and height.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::util::rect::Rect;
    ///
    /// let r = Rect::from_origin_size(10, 20, 30, 40);
    /// assert_eq!((r.right, r.bottom), (40, 60));
    /// ```
    pub fn from_origin_size(x: T, y: T, w: T, h: T) -> Self
    where
        T: Add<Output = T>,
    {
        Self { left: x, top: y, right: x + w, bottom: y + h }
    }

    /// Returns the width of `self`. Negative if `right < left`.
    pub fn width(&self) -> T::Output
    where
        T: Sub,
    {
        self.right - self.left
    }

    /// Returns the height of `self`. Negative if `bottom < top`.
    pub fn height(&self) -> T::Output
    where
        T: Sub,
    {
        self.bottom - self.top
    }

    /// Returns whether the point (`x`, `y`) lies in `self`, all four edges
    /// included.
    pub fn contains(&self, x: T, y: T) -> bool
    where
        T: PartialOrd,
    {
        (self.left..=self.right).contains(&x)
            && (self.top..=self.bottom).contains(&y)
    }

    /// Returns whether the point (`x`, `y`) lies in `self`, with the right
    /// and bottom edges excluded.
    pub fn contains_exclusive(&self, x: T, y: T) -> bool
    where
        T: PartialOrd,
    {
        (self.left..self.right).contains(&x)
            && (self.top..self.bottom).contains(&y)
    }

    /// Returns the intersection of `self` and `other`, or `None` if they
    /// do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self>
    where
        T: PartialOrd,
    {
        let max = |a: T, b: T| if a < b { b } else { a };
        let min = |a: T, b: T| if b < a { b } else { a };
        let res = Self {
            left: max(self.left, other.left),
            top: max(self.top, other.top),
            right: min(self.right, other.right),
            bottom: min(self.bottom, other.bottom),
        };
        (res.left < res.right && res.top < res.bottom).then_some(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size() {
        let r = Rect::from_origin_size(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(Rect { left: 5, top: 0, right: 2, bottom: 1 }.width(), -3);
    }

    #[test]
    fn contains_includes_all_edges() {
        let r = Rect::from_origin_size(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(10.0, 5.0));
        assert!(r.contains(3.0, 4.0));
        assert!(!r.contains(10.1, 1.0));
        assert!(!r.contains(1.0, -0.1));
        assert!(!r.contains(f64::NAN, 1.0));
    }

    #[test]
    fn contains_exclusive_omits_far_edges() {
        let r = Rect::from_origin_size(0, 0, 4, 4);
        assert!(r.contains_exclusive(0, 0));
        assert!(r.contains_exclusive(3, 3));
        assert!(!r.contains_exclusive(4, 3));
        assert!(!r.contains_exclusive(3, 4));
    }

    #[test]
    fn intersection() {
        let a = Rect::from_origin_size(0, 0, 10, 10);
        let b = Rect::from_origin_size(5, -5, 10, 10);
        assert_eq!(
            a.intersect(&b),
            Some(Rect { left: 5, top: 0, right: 10, bottom: 5 })
        );
        let c = Rect::from_origin_size(20, 20, 1, 1);
        assert_eq!(a.intersect(&c), None);
    }
}
