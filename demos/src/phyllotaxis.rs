//! Phyllotaxis point spirals.
//!
//! Seed *n* of a sunflower-like spiral is placed at angle `n·α` and radius
//! `c·√n` from the center, where α is the divergence angle and `c` the
//! spacing. With α close to the golden angle, about 137.5°, the seeds pack
//! the disk evenly. See chapter 4 of *The Algorithmic Beauty of Plants* by
//! Prusinkiewicz and Lindenmayer.

use clap::ValueEnum;

use mx::geom::Vector;
use mx::math::{HlsRgb, Point2, degs, float::fp};
use mx::util::buf::Bitmap;

/// Default distance scale between seeds, in pixels.
pub const DEFAULT_SPACING: f64 = 6.0;

/// Default divergence angle in degrees.
pub const DEFAULT_DIVERGENCE_DEGS: f64 = 137.5;

/// A single seed of the spiral.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Seed {
    /// Zero-based index of the seed.
    pub n: u32,
    /// Angle in radians, `n` times the divergence angle. Not normalized.
    pub angle: f64,
    /// Distance from the center.
    pub radius: f64,
    /// Position in screen coordinates, y axis pointing down.
    pub pos: Point2,
}

/// An unbounded generator of the seeds of one spiral.
///
/// # Examples
/// ```
/// use morphx_demos::phyllotaxis::Phyllotaxis;
/// use mx::math::pt2;
///
/// let mut spiral = Phyllotaxis::new(pt2(100.0, 100.0));
/// let first = spiral.next().unwrap();
/// assert_eq!(first.pos, pt2(100.0, 100.0));
/// assert_eq!(spiral.nth(3).unwrap().radius, 12.0); // 6·√4
/// ```
#[derive(Clone, Debug)]
pub struct Phyllotaxis {
    n: u32,
    spacing: f64,
    divergence: f64,
    center: Point2,
}

/// Which property of a seed determines its hue.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum HueSource {
    /// The seed angle; its value in radians is taken as degrees.
    #[default]
    Angle,
    /// The seed index.
    Index,
    /// The distance from the center.
    Radius,
}

/// Draws seeds as filled circles, colored according to a [`HueSource`].
#[derive(Clone, Debug)]
pub struct Painter {
    color: HlsRgb,
    hue_source: HueSource,
    size: f64,
}

//
// Inherent impls
//

impl Phyllotaxis {
    /// Returns a generator with default spacing and divergence, centered
    /// at `center`.
    pub fn new(center: Point2) -> Self {
        Self {
            n: 0,
            spacing: DEFAULT_SPACING,
            divergence: degs(DEFAULT_DIVERGENCE_DEGS),
            center,
        }
    }

    /// Sets the spacing constant `c`.
    pub fn spacing(mut self, c: f64) -> Self {
        self.spacing = c;
        self
    }

    /// Sets the divergence angle, in radians.
    pub fn divergence(mut self, a: f64) -> Self {
        self.divergence = a;
        self
    }

    /// Returns the index of the next seed, or equivalently the number of
    /// seeds generated since the last reset.
    pub fn next_index(&self) -> u32 {
        self.n
    }

    /// Returns the center of the spiral.
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Restarts the spiral from the first seed around a new center.
    pub fn reset(&mut self, center: Point2) {
        self.n = 0;
        self.center = center;
    }

    /// Returns seed number `n`.
    pub fn seed(&self, n: u32) -> Seed {
        let angle = f64::from(n) * self.divergence;
        let radius = self.spacing * fp::sqrt(f64::from(n));
        // Flip the angle so the spiral turns counterclockwise on screen
        let pos = Vector::new(radius, -angle, self.center).destination();
        Seed { n, angle, radius, pos }
    }
}

impl HueSource {
    /// Returns the hue of `seed` in degrees, not yet wrapped into [0, 360).
    pub fn hue(self, seed: &Seed) -> f64 {
        match self {
            Self::Angle => seed.angle,
            Self::Index => f64::from(seed.n),
            Self::Radius => seed.radius,
        }
    }
}

impl Painter {
    /// Returns a painter drawing circles of diameter `size`.
    pub fn new(hue_source: HueSource, size: f64) -> Self {
        Self {
            color: HlsRgb::from_hls(0.5, 0.5, 1.0),
            hue_source,
            size,
        }
    }

    /// Returns the color of the most recently drawn seed.
    pub fn color(&self) -> HlsRgb {
        self.color
    }

    /// Draws `seed` as a filled circle whose bounding box has its top-left
    /// corner at the seed position.
    pub fn draw(&mut self, bmp: &mut Bitmap, seed: &Seed) {
        self.color.set_hue(self.hue_source.hue(seed));
        let Point2 { x, y } = seed.pos;
        bmp.fill_ellipse(self.color.to_rgba(), x, y, self.size, self.size);
    }
}

//
// Trait impls
//

impl Iterator for Phyllotaxis {
    type Item = Seed;

    fn next(&mut self) -> Option<Seed> {
        let seed = self.seed(self.n);
        self.n = self.n.checked_add(1)?;
        Some(seed)
    }
}
