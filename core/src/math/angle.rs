//! Angle unit conversions and normalization.
//!
//! Angles are plain `f64` radians throughout the crate. The helpers here
//! convert from and to degrees, and wrap arbitrary angles into one turn.

use core::f64::consts::{PI, TAU};

use super::float::wrap;

/// Number of radians in one degree.
pub const RADS_PER_DEG: f64 = PI / 180.0;

/// Number of degrees in one radian.
pub const DEGS_PER_RAD: f64 = 180.0 / PI;

/// Returns `a` degrees converted to radians.
///
/// # Examples
/// ```
/// use morphx_core::math::degs;
///
/// assert_eq!(degs(180.0), std::f64::consts::PI);
/// ```
#[inline]
pub const fn degs(a: f64) -> f64 {
    a * RADS_PER_DEG
}

/// Returns `a` radians converted to degrees.
#[inline]
pub const fn to_degs(a: f64) -> f64 {
    a * DEGS_PER_RAD
}

/// Wraps an angle in radians into the range [0, 2π).
///
/// NaN stays NaN. Infinities become NaN.
///
/// # Examples
/// ```
/// use std::f64::consts::{FRAC_PI_2, PI};
/// use morphx_core::math::normalize_rads;
///
/// assert_eq!(normalize_rads(-FRAC_PI_2), 3.0 * FRAC_PI_2);
/// assert_eq!(normalize_rads(2.0 * PI), 0.0);
/// ```
#[inline]
pub fn normalize_rads(a: f64) -> f64 {
    wrap(a, TAU)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn degree_conversions() {
        assert_approx_eq!(degs(90.0), FRAC_PI_2);
        assert_approx_eq!(to_degs(FRAC_PI_4), 45.0);
        assert_approx_eq!(to_degs(degs(137.5)), 137.5);
    }

    #[test]
    fn normalize_within_one_turn() {
        assert_eq!(normalize_rads(0.0), 0.0);
        assert_eq!(normalize_rads(1.0), 1.0);
        assert_approx_eq!(normalize_rads(TAU + 1.0), 1.0);
        assert_approx_eq!(normalize_rads(-1.0), TAU - 1.0);
        assert_approx_eq!(normalize_rads(-3.0 * TAU - 1.0), TAU - 1.0);
        assert_approx_eq!(normalize_rads(5.0 * TAU + 0.5), 0.5);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        for a in [-1e-300, -f64::EPSILON, TAU, -TAU, 4.0 * TAU] {
            let n = normalize_rads(a);
            assert!((0.0..TAU).contains(&n), "{a} normalized to {n}");
        }
    }

    #[test]
    fn normalize_nan() {
        assert!(normalize_rads(f64::NAN).is_nan());
        assert!(normalize_rads(f64::INFINITY).is_nan());
    }
}
