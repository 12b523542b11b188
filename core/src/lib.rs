//! Core functionality of the `morphx` toolkit.
//!
//! Includes a small math library with angles, points, complex numbers and
//! colors; a 2D [vector][geom::vector::Vector] type modelled as a directed
//! segment with origin, magnitude, and angle; and a direct pixel
//! [bitmap][util::buf::Bitmap] with simple drawing helpers.
//!
//! # Angle units
//!
//! Every angle accepted or returned by this crate is in **radians**, with one
//! exception: the hue of an [`HlsRgb`][math::color::HlsRgb] color is in
//! **degrees**, in the range [0, 360). Take care when feeding an angle into
//! a hue or vice versa.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library. Enabled
//!   by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` targets.
//!
//! One of the two features must be enabled. Without `std`, the crate only
//! depends on `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("morphx-core requires either the `std` or the `libm` feature");

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Complex, HlsRgb, Point2, Point3, Rgba, degs, pt2, pt3, rgb,
        rgba,
    };

    pub use crate::geom::Vector;

    pub use crate::render::{LineSink, PixelSink};

    pub use crate::util::{buf::Bitmap, rect::Rect};
}
