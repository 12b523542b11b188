//! Floating-point compatibility API.
//!
//! Transcendental `f64` functions are unavailable in `no_std`. This module
//! exposes the subset the crate needs under a single name, [`fp`], backed
//! either by the standard library or by the `libm` crate depending on which
//! feature is enabled.

#[cfg(feature = "std")]
pub mod fp {
    #[inline]
    pub fn abs(x: f64) -> f64 {
        x.abs()
    }
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline]
    pub fn powf(x: f64, y: f64) -> f64 {
        x.powf(y)
    }
    #[inline]
    pub fn sin(x: f64) -> f64 {
        x.sin()
    }
    #[inline]
    pub fn cos(x: f64) -> f64 {
        x.cos()
    }
    #[inline]
    pub fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline]
    pub fn log(x: f64) -> f64 {
        x.ln()
    }
    #[inline]
    pub fn ceil(x: f64) -> f64 {
        x.ceil()
    }
    /// Rounds to the nearest integer, ties to even.
    #[inline]
    pub fn round_ties_even(x: f64) -> f64 {
        x.round_ties_even()
    }
    #[inline]
    pub fn rem_euclid(x: f64, m: f64) -> f64 {
        x.rem_euclid(m)
    }
}

#[cfg(all(feature = "libm", not(feature = "std")))]
pub mod fp {
    pub use libm::{atan2, ceil, cos, fabs as abs, log, pow as powf, sin, sqrt};

    /// Rounds to the nearest integer, ties to even.
    ///
    /// `rint` honors the current rounding mode, which is always
    /// round-to-nearest-even in Rust.
    #[inline]
    pub fn round_ties_even(x: f64) -> f64 {
        libm::rint(x)
    }
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f64, m: f64) -> f64 {
        let r = libm::fmod(x, m);
        if r < 0.0 { r + abs(m) } else { r }
    }
}

/// Wraps `x` into the half-open range `[0, m)`.
///
/// Unlike a bare `rem_euclid`, never returns `m` itself: a tiny negative `x`
/// whose wrapped value rounds up to `m` yields zero instead.
///
/// # Examples
/// ```
/// use morphx_core::math::float::wrap;
///
/// assert_eq!(wrap(400.0, 360.0), 40.0);
/// assert_eq!(wrap(-90.0, 360.0), 270.0);
/// assert_eq!(wrap(-1e-20, 360.0), 0.0);
/// ```
#[inline]
pub fn wrap(x: f64, m: f64) -> f64 {
    let r = fp::rem_euclid(x, m);
    if r >= m { 0.0 } else { r }
}
