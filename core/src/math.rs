//! Scalar, point, complex, and color math.
//!
//! Includes [angle][angle] helpers, [points][point], [complex numbers][complex]
//! and [colors][color], as well as utilities such as approximate equality
//! comparisons.

pub use {
    angle::{RADS_PER_DEG, degs, normalize_rads, to_degs},
    approx::ApproxEq,
    color::{Hls, HlsRgb, Rgba, rgb, rgba},
    complex::Complex,
    point::{Point2, Point3, pt2, pt3},
};

pub mod angle;
pub mod approx;
pub mod color;
pub mod complex;
pub mod float;
pub mod point;
