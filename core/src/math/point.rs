use core::fmt::{self, Display, Formatter};

use super::{ApproxEq, float::fp};

/// A point in the 2D plane with `f64` components.
///
/// Compares component-wise and exactly; use [`ApproxEq`] in tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// A point in 3D space with integer components.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Returns a 2-point with `x` and `y` components.
pub const fn pt2(x: f64, y: f64) -> Point2 {
    Point2 { x, y }
}

/// Returns a 3-point with `x`, `y`, and `z` components.
pub const fn pt3(x: i32, y: i32, z: i32) -> Point3 {
    Point3 { x, y, z }
}

impl Point2 {
    /// The point (0, 0).
    pub const ORIGIN: Self = pt2(0.0, 0.0);

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::math::pt2;
    ///
    /// assert_eq!(pt2(1.0, 1.0).distance(&pt2(4.0, 5.0)), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        fp::sqrt(dx * dx + dy * dy)
    }

    /// Returns `self` moved by `dx` and `dy`.
    #[inline]
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        pt2(self.x + dx, self.y + dy)
    }

    /// Returns the integer pixel coordinates of `self`, truncated toward
    /// zero.
    #[inline]
    pub fn to_i32(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Returns whether both components of `self` are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point3 {
    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::math::pt3;
    ///
    /// assert_eq!(pt3(0, 0, 0).distance(&pt3(2, 3, 6)), 7.0);
    /// ```
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        fp::sqrt(dx * dx + dy * dy + dz * dz)
    }
}

impl ApproxEq for Point2 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f64) -> bool {
        [self.x, self.y].approx_eq_eps(&[other.x, other.y], rel_eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        pt2(x, y)
    }
}

impl From<(i32, i32)> for Point2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        pt2(x.into(), y.into())
    }
}

impl Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
