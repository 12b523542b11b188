//! Complex numbers.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::float::fp;

/// A complex number with `f64` real and imaginary parts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// Zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// The multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Returns the complex number `re + im·i`.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns the squared magnitude, `re² + im²`.
    #[inline]
    pub fn power(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
    /// Returns the square root of [`power`][Self::power]. Same as
    /// [`magnitude`][Self::magnitude].
    #[inline]
    pub fn power_root(&self) -> f64 {
        fp::sqrt(self.power())
    }
    /// Returns the Manhattan norm, `|re| + |im|`.
    #[inline]
    pub fn power2(&self) -> f64 {
        fp::abs(self.re) + fp::abs(self.im)
    }
    /// Returns the square root of [`power2`][Self::power2].
    #[inline]
    pub fn power2_root(&self) -> f64 {
        fp::sqrt(self.power2())
    }

    /// Returns the magnitude (modulus) of `self`.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::math::Complex;
    ///
    /// assert_eq!(Complex::new(3.0, -4.0).magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.power_root()
    }
    /// Alias of [`magnitude`][Self::magnitude].
    #[inline]
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// Returns the complex conjugate of `self`.
    #[inline]
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns `self` raised to the integer power `n`.
    ///
    /// Computed by repeated multiplication; `z⁰` is one.
    #[must_use]
    pub fn powi(&self, n: u32) -> Self {
        (0..n).fold(Self::ONE, |acc, _| acc * *self)
    }

    /// Returns the real number `base` raised to the complex power `exp`.
    ///
    /// Uses `b^(x + yi) = b^x · (cos(y ln b) + i sin(y ln b))`, which is
    /// only meaningful for positive `base`.
    ///
    /// # Examples
    /// ```
    /// use morphx_core::assert_approx_eq;
    /// use morphx_core::math::Complex;
    ///
    /// // Euler's identity: e^(iπ) = -1
    /// let z = Complex::real_pow(std::f64::consts::E, Complex::new(0.0, std::f64::consts::PI));
    /// assert_approx_eq!(z.re, -1.0);
    /// assert_approx_eq!(z.im, 0.0);
    /// ```
    pub fn real_pow(base: f64, exp: Self) -> Self {
        let ab = fp::powf(base, exp.re);
        let phase = exp.im * fp::log(base);
        Self::new(ab * fp::cos(phase), ab * fp::sin(phase))
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} + {:.2}i", self.re, self.im)
    }
}

//
// Operators
//

impl Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.im * rhs.re + self.re * rhs.im,
        )
    }
}

impl Neg for Complex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Add<f64> for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        rhs + self
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::from(self) - rhs
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn norms() {
        let z = Complex::new(-3.0, 4.0);
        assert_eq!(z.power(), 25.0);
        assert_eq!(z.power_root(), 5.0);
        assert_eq!(z.abs(), 5.0);
        assert_eq!(z.power2(), 7.0);
        assert_approx_eq!(z.power2_root(), fp::sqrt(7.0));
    }

    #[test]
    fn arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0 * a, Complex::new(2.0, 4.0));
        assert_eq!(a / 2.0, Complex::new(0.5, 1.0));
        assert_eq!(a + 1.0, Complex::new(2.0, 2.0));
        assert_eq!(1.0 + a, Complex::new(2.0, 2.0));
        assert_eq!(a - 1.0, Complex::new(0.0, 2.0));
    }

    #[test]
    fn real_minus_complex_negates_imaginary_part() {
        assert_eq!(5.0 - Complex::new(1.0, 2.0), Complex::new(4.0, -2.0));
    }

    #[test]
    fn i_squared_is_minus_one() {
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
        assert_eq!(Complex::I.powi(4), Complex::ONE);
    }

    #[test]
    fn integer_powers() {
        let z = Complex::new(1.0, 1.0);
        assert_eq!(z.powi(0), Complex::ONE);
        assert_eq!(z.powi(1), z);
        assert_eq!(z.powi(2), Complex::new(0.0, 2.0));
        assert_eq!(z.powi(3), Complex::new(-2.0, 2.0));
    }

    #[test]
    fn real_base_complex_exponent() {
        let z = Complex::real_pow(2.0, Complex::from(3.0));
        assert_approx_eq!(z.re, 8.0);
        assert_approx_eq!(z.im, 0.0);
    }

    #[test]
    fn conjugate_product_is_power() {
        let z = Complex::new(2.0, -7.0);
        assert_eq!(z * z.conjugate(), Complex::from(z.power()));
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(1.0, -2.5).to_string(), "1.00 + -2.50i");
    }
}
