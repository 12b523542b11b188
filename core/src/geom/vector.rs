//! Directed line segments in polar form.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Div, Mul, Sub};

use crate::math::{Point2, Rgba, float::fp, normalize_rads, pt2, to_degs};
use crate::render::LineSink;
use crate::util::rect::Rect;

/// A directed 2D line segment given by an origin, a magnitude, and an angle.
///
/// The endpoint, or *destination*, is derived:
/// ```text
/// destination = origin + magnitude · (cos angle, sin angle)
/// ```
/// The angle is in radians and always stored normalized to [0, 2π). Its
/// cosine and sine are cached, and recomputed only when the angle changes.
///
/// # Equality
///
/// Two vectors compare equal iff their angles and magnitudes are equal.
/// The origin is **not** compared: vectors are free vectors for the purpose
/// of equality, even though every other operation treats them as anchored
/// segments.
/// ```
/// use std::f64::consts::FRAC_PI_4;
/// use morphx_core::{geom::Vector, math::pt2};
///
/// let a = Vector::new(5.0, FRAC_PI_4, pt2(0.0, 0.0));
/// let b = Vector::new(5.0, FRAC_PI_4, pt2(100.0, 100.0));
/// assert_eq!(a, b);
/// ```
///
/// # Non-finite values
///
/// Nothing here fails. Degenerate inputs such as vertical segments or
/// zero-length vectors produce infinite or NaN results, which propagate
/// through subsequent computations. Check [`Point2::is_finite`] before
/// drawing if in doubt.
#[derive(Copy, Clone, Debug)]
pub struct Vector {
    origin: Point2,
    magnitude: f64,
    angle: f64,
    cos: f64,
    sin: f64,
}

impl Vector {
    /// The empty vector: zero magnitude and angle, at the coordinate origin.
    pub const EMPTY: Self = Self {
        origin: Point2::ORIGIN,
        magnitude: 0.0,
        angle: 0.0,
        cos: 1.0,
        sin: 0.0,
    };

    /// Returns a vector with the given magnitude, angle in radians, and
    /// origin. The angle is normalized to [0, 2π).
    pub fn new(magnitude: f64, angle: f64, origin: Point2) -> Self {
        let mut v = Self { magnitude, origin, ..Self::EMPTY };
        v.set_angle(angle);
        v
    }

    /// Returns the vector from (`x1`, `y1`) to (`x2`, `y2`).
    ///
    /// # Examples
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use morphx_core::{geom::Vector, math::pt2};
    ///
    /// let v = Vector::from_points(1.0, 1.0, 1.0, 4.0);
    /// assert_eq!(v.magnitude(), 3.0);
    /// assert_eq!(v.angle(), FRAC_PI_2);
    /// assert_eq!(v.origin(), pt2(1.0, 1.0));
    /// ```
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let mut v = Self { origin: pt2(x1, y1), ..Self::EMPTY };
        v.set_angle(fp::atan2(dy, dx));
        v.magnitude = Self::distance(dx, dy);
        v
    }

    /// Returns the vector from `origin` to `dest`.
    pub fn between(origin: Point2, dest: Point2) -> Self {
        Self::from_points(origin.x, origin.y, dest.x, dest.y)
    }

    /// Returns the vector from the coordinate origin to (`x`, `y`).
    pub fn to(x: f64, y: f64) -> Self {
        Self::from_points(0.0, 0.0, x, y)
    }

    /// Returns a copy of `v` with magnitude 1.
    ///
    /// A zero vector keeps its (zero) angle and becomes the unit x vector.
    #[must_use]
    pub fn normalize(v: &Self) -> Self {
        Self { magnitude: 1.0, ..*v }
    }

    /// Returns the unit vector at `p1` pointing toward `p2`.
    pub fn normalize_points(p1: Point2, p2: Point2) -> Self {
        Self::normalize(&Self::between(p1, p2))
    }

    /// Returns the Euclidean length of the displacement (`dx`, `dy`).
    #[inline]
    pub fn distance(dx: f64, dy: f64) -> f64 {
        fp::sqrt(dx * dx + dy * dy)
    }

    //
    // Accessors
    //

    /// Returns the start point of `self`.
    #[inline]
    pub fn origin(&self) -> Point2 {
        self.origin
    }
    /// Returns the end point of `self`.
    #[inline]
    pub fn destination(&self) -> Point2 {
        pt2(self.x2(), self.y2())
    }
    /// Returns the length of `self`. May be negative after scaling by a
    /// negative factor.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
    /// Returns the angle of `self` in radians, in [0, 2π).
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
    /// Returns the cached cosine of the angle.
    #[inline]
    pub fn angle_cos(&self) -> f64 {
        self.cos
    }
    /// Returns the cached sine of the angle.
    #[inline]
    pub fn angle_sin(&self) -> f64 {
        self.sin
    }
    #[inline]
    pub fn x1(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn y1(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn x2(&self) -> f64 {
        self.origin.x + self.magnitude * self.cos
    }
    #[inline]
    pub fn y2(&self) -> f64 {
        self.origin.y + self.magnitude * self.sin
    }

    /// Returns the slope `dy/dx` of `self`.
    ///
    /// Infinite for vertical vectors, NaN for zero-length ones.
    pub fn slope(&self) -> f64 {
        (self.y2() - self.y1()) / (self.x2() - self.x1())
    }

    //
    // Mutators
    //

    /// Sets the angle of `self` in radians, normalizing it to [0, 2π).
    ///
    /// The cached cosine and sine are recomputed only if `angle` differs
    /// from the current angle.
    pub fn set_angle(&mut self, angle: f64) {
        if angle != self.angle {
            self.angle = normalize_rads(angle);
            self.cos = fp::cos(self.angle);
            self.sin = fp::sin(self.angle);
        }
    }

    /// Sets the magnitude of `self`, keeping origin and angle.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }

    /// Moves the origin of `self` to `origin`, keeping magnitude and angle.
    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    /// Moves the destination of `self` to `dest`, keeping the origin.
    pub fn set_destination(&mut self, dest: Point2) {
        self.reset(self.x1(), self.y1(), dest.x, dest.y);
    }

    /// Moves the x coordinate of the origin, keeping the destination.
    pub fn set_x1(&mut self, x1: f64) {
        self.reset(x1, self.y1(), self.x2(), self.y2());
    }
    /// Moves the y coordinate of the origin, keeping the destination.
    pub fn set_y1(&mut self, y1: f64) {
        self.reset(self.x1(), y1, self.x2(), self.y2());
    }
    /// Moves the x coordinate of the destination, keeping the origin.
    pub fn set_x2(&mut self, x2: f64) {
        self.reset(self.x1(), self.y1(), x2, self.y2());
    }
    /// Moves the y coordinate of the destination, keeping the origin.
    pub fn set_y2(&mut self, y2: f64) {
        self.reset(self.x1(), self.y1(), self.x2(), y2);
    }

    /// Makes `self` the vector from (`x1`, `y1`) to (`x2`, `y2`).
    pub fn reset(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.reset_from(&Self::from_points(x1, y1, x2, y2));
    }

    /// Copies the origin, magnitude, and angle of `other` into `self`.
    pub fn reset_from(&mut self, other: &Self) {
        self.magnitude = other.magnitude;
        self.origin = other.origin;
        self.set_angle(other.angle);
    }

    /// Moves the origin of `self` by `distance` along its own direction.
    /// A negative distance moves backward.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::{assert_approx_eq, geom::Vector, math::pt2};
    ///
    /// let mut v = Vector::from_points(0.0, 0.0, 0.0, 2.0);
    /// v.move_by(3.0);
    /// assert_approx_eq!(v.origin(), pt2(0.0, 3.0));
    /// assert_eq!(v.magnitude(), 2.0);
    /// ```
    pub fn move_by(&mut self, distance: f64) {
        self.origin = Self::new(distance, self.angle, self.origin).destination();
    }

    /// Moves the origin of `self` by the displacement of `other`: its
    /// magnitude along its angle. The direction of `self` is unchanged.
    pub fn move_along(&mut self, other: &Self) {
        let angle = self.angle;
        self.set_angle(other.angle);
        self.move_by(other.magnitude);
        self.set_angle(angle);
    }

    /// Shifts both endpoints of `self` by (`dx`, `dy`).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.offset(dx, dy);
    }

    /// Moves `self` so that its origin is at (`x`, `y`), shifting the
    /// destination by the same amount.
    pub fn translate_abs(&mut self, x: f64, y: f64) {
        self.origin = pt2(x, y);
    }

    /// Moves `self` so that its origin is at `p`.
    pub fn translate_abs_to(&mut self, p: Point2) {
        self.translate_abs(p.x, p.y);
    }

    /// Rotates `self` rigidly by `angle` radians about `pivot`.
    ///
    /// Each endpoint is converted to polar form relative to the pivot, the
    /// angle added, and the result converted back. An endpoint coinciding
    /// with the pivot stays put.
    ///
    /// # Examples
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use morphx_core::{assert_approx_eq, geom::Vector, math::pt2};
    ///
    /// let mut v = Vector::from_points(1.0, 0.0, 2.0, 0.0);
    /// v.transform(FRAC_PI_2, pt2(0.0, 0.0));
    /// assert_approx_eq!(v.origin(), pt2(0.0, 1.0));
    /// assert_approx_eq!(v.destination(), pt2(0.0, 2.0));
    /// ```
    pub fn transform(&mut self, angle: f64, pivot: Point2) {
        let rotate = |p: Point2| {
            let (dx, dy) = (p.x - pivot.x, p.y - pivot.y);
            let d = Self::distance(dx, dy);
            let a = fp::atan2(dy, dx) + angle;
            pt2(pivot.x + d * fp::cos(a), pivot.y + d * fp::sin(a))
        };
        let (p1, p2) = (rotate(self.origin), rotate(self.destination()));
        self.reset(p1.x, p1.y, p2.x, p2.y);
    }

    //
    // Queries
    //

    /// Returns the point where `self` meets `other`, if any.
    ///
    /// `self` is treated as a segment and `other` as a ray: the crossing must
    /// lie between the endpoints of `self`, and anywhere from the origin of
    /// `other` onward, even past its destination.
    ///
    /// Parallel and coincident vectors never intersect.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::{assert_approx_eq, geom::Vector, math::pt2};
    ///
    /// let a = Vector::from_points(0.0, 0.0, 2.0, 2.0);
    /// let b = Vector::from_points(0.0, 2.0, 2.0, 0.0);
    /// assert_approx_eq!(a.intersects(&b), Some(pt2(1.0, 1.0)));
    /// ```
    pub fn intersects(&self, other: &Self) -> Option<Point2> {
        let (x1, y1, x2, y2) = (self.x1(), self.y1(), self.x2(), self.y2());
        let (x3, y3, x4, y4) = (other.x1(), other.y1(), other.x2(), other.y2());

        let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if d == 0.0 {
            return None;
        }
        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / d;

        ((0.0..=1.0).contains(&t) && u >= 0.0)
            .then(|| pt2(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    }

    /// Returns whether the origin of `self` lies within `rect`, edges
    /// included. The rest of the segment is not considered.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        rect.contains(self.x1(), self.y1())
    }

    //
    // Arithmetic
    //

    /// Returns the vector from the origin of `self` to the destination of
    /// `other` when `other` is placed at the destination of `self`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let tail = Self { origin: self.destination(), ..*other };
        Self::between(self.origin, tail.destination())
    }

    /// Returns the vector from the destination of `other`, placed at the
    /// origin of `self`, to the destination of `self`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let head = Self { origin: self.origin, ..*other };
        Self::between(head.destination(), self.destination())
    }

    /// Returns `self` with its magnitude multiplied by `s`.
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        Self { magnitude: self.magnitude * s, ..*self }
    }

    /// Returns the dot product `|v1|·|v2|·cos(|a1 - a2|)`.
    pub fn dot(v1: &Self, v2: &Self) -> f64 {
        let a = fp::abs(v1.angle - v2.angle);
        v1.magnitude * v2.magnitude * fp::cos(a)
    }

    /// Returns the scalar 2D cross product of the displacements of `v1`
    /// and `v2`.
    pub fn cross(v1: &Self, v2: &Self) -> f64 {
        let (rx, ry) = (v1.x2() - v1.x1(), v1.y2() - v1.y1());
        let (tx, ty) = (v2.x2() - v2.x1(), v2.y2() - v2.y1());
        rx * ty - ry * tx
    }

    /// Returns the vector perpendicular to `v`, counterclockwise in a y-up
    /// frame, scaled by `s` and sharing the origin of `v`.
    pub fn cross_scalar(v: &Self, s: f64) -> Self {
        let (dx, dy) = (v.x2() - v.x1(), v.y2() - v.y1());
        Self::between(v.origin, v.origin.offset(-s * dy, s * dx))
    }

    /// Returns `magnitude^exp`, computed as [`dot`][Self::dot]`(v, v)` when
    /// `exp` is 2.
    pub fn pow(v: &Self, exp: f64) -> f64 {
        if exp == 2.0 {
            Self::dot(v, v)
        } else {
            fp::powf(v.magnitude, exp)
        }
    }

    //
    // Drawing
    //

    /// Draws `self` as a segment from origin to destination.
    ///
    /// With `scale` other than 1, the segment is drawn with its magnitude
    /// multiplied by `scale`; `self` is left untouched either way. Vectors
    /// of zero magnitude draw nothing.
    pub fn paint<S>(&self, sink: &mut S, color: Rgba, width: f32, scale: f64)
    where
        S: LineSink + ?Sized,
    {
        if self.magnitude == 0.0 {
            return;
        }
        let v = if scale == 1.0 { *self } else { self.scale(scale) };
        sink.draw_line(v.origin(), v.destination(), color, width);
    }
}

/// Compares two optional vectors, treating a missing one as
/// [`Vector::EMPTY`].
///
/// # Examples
/// ```
/// use morphx_core::geom::{Vector, vector::eq_or_empty};
///
/// assert!(eq_or_empty(None, Some(&Vector::EMPTY)));
/// assert!(!eq_or_empty(None, Some(&Vector::default())));
/// ```
pub fn eq_or_empty(a: Option<&Vector>, b: Option<&Vector>) -> bool {
    a.unwrap_or(&Vector::EMPTY) == b.unwrap_or(&Vector::EMPTY)
}

//
// Foreign trait impls
//

impl Default for Vector {
    /// Returns the unit vector along the positive x axis, at the origin.
    fn default() -> Self {
        Self { magnitude: 1.0, ..Self::EMPTY }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.angle == other.angle && self.magnitude == other.magnitude
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{:.2}| ∠{:.2}° {}-{}",
            self.magnitude,
            to_degs(self.angle),
            self.origin(),
            self.destination()
        )
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector::add(&self, &rhs)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

impl Div<f64> for Vector {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        self.scale(1.0 / s)
    }
}
