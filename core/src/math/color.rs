//! RGBA colors and the hue-luminance-saturation color model.

use core::fmt::{self, Debug, Formatter};

use super::float::{fp, wrap};

//
// Types
//

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Rgba(pub [u8; 4]);

/// Hue, luminance, and saturation components.
///
/// The hue is in **degrees**, unlike every other angle in this crate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hls {
    /// Hue in degrees, in the range [0, 360).
    pub hue: f64,
    /// Luminance (lightness) in the range [0, 1].
    pub lum: f64,
    /// Saturation in the range [0, 1].
    pub sat: f64,
}

/// A color convertible between RGB and HLS representations.
///
/// At any time exactly one of the two representations is authoritative:
/// the one most recently written. Reading the other one converts on demand
/// without changing which side is authoritative. Writing a component of
/// the non-authoritative side converts first, then makes that side
/// authoritative.
///
/// All setters clamp or wrap their input; there are no error cases.
///
/// # Examples
/// ```
/// use morphx_core::math::{HlsRgb, rgb};
///
/// let green = HlsRgb::from_hls(120.0, 0.5, 1.0);
/// assert_eq!(green.to_rgba(), rgb(0, 255, 0));
///
/// let mut c = HlsRgb::from_rgba(rgb(255, 0, 0));
/// c.set_hue(240.0);
/// assert_eq!(c.to_rgba(), rgb(0, 0, 255));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HlsRgb {
    alpha: u8,
    repr: Repr,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Repr {
    Rgb([u8; 3]),
    Hls(Hls),
}

/// Returns an opaque color with `r`, `g`, and `b` components.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    Rgba([r, g, b, 0xFF])
}

/// Returns a color with `r`, `g`, `b`, and `a` components.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    Rgba([r, g, b, a])
}

//
// Inherent impls
//

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = rgb(0xFF, 0xFF, 0xFF);

    /// Returns the red component of `self`.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }
    /// Returns the green component of `self`.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }
    /// Returns the alpha component of `self`.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0xAA_RR_GG_BB`.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    /// Returns the opaque color encoded as `0x00_RR_GG_BB` in `rgb`.
    /// The top byte is ignored.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        self::rgb(r, g, b)
    }
}

impl Hls {
    /// Returns new HLS components, wrapping `hue` into [0, 360) and
    /// clamping `lum` and `sat` into [0, 1].
    pub fn new(hue: f64, lum: f64, sat: f64) -> Self {
        Self {
            hue: check_hue(hue),
            lum: check_unit(lum),
            sat: check_unit(sat),
        }
    }

    /// Converts `self` to RGB bytes.
    ///
    /// Achromatic (zero saturation) colors yield gray. Otherwise each
    /// channel is interpolated through the hue sectors. Values that do
    /// not fit a byte become 255.
    pub fn to_rgb(&self) -> [u8; 3] {
        let Self { hue, lum, sat } = *self;
        if sat == 0.0 {
            let v = to_byte(lum * 255.0);
            return [v, v, v];
        }
        let rm2 = if lum <= 0.5 {
            lum + lum * sat
        } else {
            lum + sat - lum * sat
        };
        let rm1 = 2.0 * lum - rm2;
        [
            sector(rm1, rm2, hue + 120.0),
            sector(rm1, rm2, hue),
            sector(rm1, rm2, hue - 120.0),
        ]
    }

    /// Converts RGB bytes to HLS components.
    ///
    /// Grays (all channels equal) have zero saturation and zero hue.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let sum = f64::from(max) + f64::from(min);
        let lum = sum / 510.0;

        if max == min {
            return Self { hue: 0.0, lum, sat: 0.0 };
        }

        let delta = f64::from(max) - f64::from(min);
        let sat = if lum <= 0.5 {
            delta / sum
        } else {
            delta / (510.0 - sum)
        };

        let norm = |c: u8| (f64::from(max) - f64::from(c)) / delta;
        let (rn, gn, bn) = (norm(r), norm(g), norm(b));

        // With ties for the maximum, the later channel wins
        let mut hue = 0.0;
        if r == max {
            hue = 60.0 * (6.0 + bn - gn);
        }
        if g == max {
            hue = 60.0 * (2.0 + rn - bn);
        }
        if b == max {
            hue = 60.0 * (4.0 + gn - rn);
        }
        if hue >= 360.0 {
            hue -= 360.0;
        }
        Self { hue, lum, sat }
    }
}

impl HlsRgb {
    /// Returns a color with RGB as the authoritative representation.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { alpha: a, repr: Repr::Rgb([r, g, b]) }
    }

    /// Returns a color with RGB as the authoritative representation.
    pub const fn from_rgba(c: Rgba) -> Self {
        let [r, g, b, a] = c.0;
        Self::from_argb(a, r, g, b)
    }

    /// Returns an opaque color with HLS as the authoritative representation.
    ///
    /// `hue` is in degrees and wrapped into [0, 360); `lum` and `sat` are
    /// clamped into [0, 1].
    pub fn from_hls(hue: f64, lum: f64, sat: f64) -> Self {
        Self {
            alpha: 0xFF,
            repr: Repr::Hls(Hls::new(hue, lum, sat)),
        }
    }

    /// Returns whether HLS is the authoritative representation.
    pub fn is_hls(&self) -> bool {
        matches!(self.repr, Repr::Hls(_))
    }

    /// Returns the HLS components of `self`, converting from RGB if needed.
    pub fn to_hls(&self) -> Hls {
        match self.repr {
            Repr::Hls(hls) => hls,
            Repr::Rgb(rgb) => Hls::from_rgb(rgb),
        }
    }

    /// Returns the RGBA value of `self`, converting from HLS if needed.
    ///
    /// Converting an achromatic HLS color always yields full opacity.
    pub fn to_rgba(&self) -> Rgba {
        match self.repr {
            Repr::Rgb([r, g, b]) => rgba(r, g, b, self.alpha),
            Repr::Hls(hls) => {
                let [r, g, b] = hls.to_rgb();
                let a = if hls.sat == 0.0 { 0xFF } else { self.alpha };
                rgba(r, g, b, a)
            }
        }
    }

    /// Returns the hue in degrees, in [0, 360).
    pub fn hue(&self) -> f64 {
        self.to_hls().hue
    }
    /// Returns the luminance, in [0, 1].
    pub fn luminance(&self) -> f64 {
        self.to_hls().lum
    }
    /// Returns the saturation, in [0, 1].
    pub fn saturation(&self) -> f64 {
        self.to_hls().sat
    }
    /// Returns the red component.
    pub fn red(&self) -> u8 {
        self.to_rgba().r()
    }
    /// Returns the green component.
    pub fn green(&self) -> u8 {
        self.to_rgba().g()
    }
    /// Returns the blue component.
    pub fn blue(&self) -> u8 {
        self.to_rgba().b()
    }
    /// Returns the alpha component.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Sets the hue in degrees, wrapped into [0, 360).
    pub fn set_hue(&mut self, hue: f64) {
        self.update_hls(|hls| hls.hue = check_hue(hue));
    }
    /// Sets the luminance, clamped into [0, 1].
    pub fn set_luminance(&mut self, lum: f64) {
        self.update_hls(|hls| hls.lum = check_unit(lum));
    }
    /// Sets the saturation, clamped into [0, 1].
    pub fn set_saturation(&mut self, sat: f64) {
        self.update_hls(|hls| hls.sat = check_unit(sat));
    }
    /// Replaces all HLS components, wrapping and clamping as [`Hls::new`].
    pub fn set_hls(&mut self, hls: Hls) {
        self.repr = Repr::Hls(Hls::new(hls.hue, hls.lum, hls.sat));
    }

    /// Sets the red component.
    pub fn set_red(&mut self, r: u8) {
        self.update_rgb(|rgb| rgb[0] = r);
    }
    /// Sets the green component.
    pub fn set_green(&mut self, g: u8) {
        self.update_rgb(|rgb| rgb[1] = g);
    }
    /// Sets the blue component.
    pub fn set_blue(&mut self, b: u8) {
        self.update_rgb(|rgb| rgb[2] = b);
    }
    /// Replaces all components, making RGB authoritative.
    pub fn set_rgba(&mut self, c: Rgba) {
        *self = Self::from_rgba(c);
    }
    /// Sets the alpha component, clamped into [0, 255].
    pub fn set_alpha(&mut self, a: i32) {
        self.alpha = a.clamp(0, 0xFF) as u8;
    }

    /// Multiplies the luminance by `1 + factor`, clamped into [0, 1].
    pub fn lighten(&mut self, factor: f64) {
        self.update_hls(|hls| hls.lum = check_unit(hls.lum * (1.0 + factor)));
    }
    /// Multiplies the luminance by `factor`, clamped into [0, 1].
    pub fn darken(&mut self, factor: f64) {
        self.update_hls(|hls| hls.lum = check_unit(hls.lum * factor));
    }

    /// Applies `f` to the HLS side, which becomes authoritative.
    fn update_hls(&mut self, f: impl FnOnce(&mut Hls)) {
        let mut hls = self.to_hls();
        f(&mut hls);
        self.repr = Repr::Hls(hls);
    }

    /// Applies `f` to the RGB side, which becomes authoritative.
    fn update_rgb(&mut self, f: impl FnOnce(&mut [u8; 3])) {
        let Rgba([r, g, b, a]) = self.to_rgba();
        let mut rgb = [r, g, b];
        f(&mut rgb);
        self.alpha = a;
        self.repr = Repr::Rgb(rgb);
    }
}

//
// Helpers
//

/// Maps one hue-rotated channel through the three hue sectors.
fn sector(rm1: f64, rm2: f64, hue: f64) -> u8 {
    let h = wrap(hue, 360.0);
    let v = if h < 60.0 {
        rm1 + (rm2 - rm1) * h / 60.0
    } else if h < 180.0 {
        rm2
    } else if h < 240.0 {
        rm1 + (rm2 - rm1) * (240.0 - h) / 60.0
    } else {
        rm1
    };
    to_byte(v * 255.0)
}

/// Rounds to the nearest byte, ties to even. Out of range and NaN map to 255.
fn to_byte(v: f64) -> u8 {
    let v = fp::round_ties_even(v);
    if (0.0..=255.0).contains(&v) {
        v as u8
    } else {
        0xFF
    }
}

fn check_hue(hue: f64) -> f64 {
    wrap(hue, 360.0)
}

fn check_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

//
// Foreign trait impls
//

impl Debug for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "Rgba(#{r:02X}{g:02X}{b:02X}{a:02X})")
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Self(c)
    }
}

impl From<Rgba> for HlsRgb {
    fn from(c: Rgba) -> Self {
        Self::from_rgba(c)
    }
}

impl From<Hls> for HlsRgb {
    fn from(Hls { hue, lum, sat }: Hls) -> Self {
        Self::from_hls(hue, lum, sat)
    }
}

impl Default for HlsRgb {
    /// Returns opaque black, in RGB.
    fn default() -> Self {
        Self::from_rgba(Rgba::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn rgba_components_and_packing() {
        let c = rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!([c.r(), c.g(), c.b(), c.a()], [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(c.to_argb_u32(), 0x44_11_22_33);
        assert_eq!(Rgba::from_rgb_u32(0xAB_11_22_33), rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn primaries_to_hls() {
        let red = Hls::from_rgb([255, 0, 0]);
        assert_eq!(red.hue, 0.0);
        assert_eq!(red.lum, 0.5);
        assert_eq!(red.sat, 1.0);

        assert_eq!(Hls::from_rgb([0, 255, 0]).hue, 120.0);
        assert_eq!(Hls::from_rgb([0, 0, 255]).hue, 240.0);
        assert_eq!(Hls::from_rgb([255, 255, 0]).hue, 60.0);
        assert_eq!(Hls::from_rgb([255, 0, 255]).hue, 300.0);
    }

    #[test]
    fn gray_is_achromatic() {
        let hls = Hls::from_rgb([128, 128, 128]);
        assert_eq!(hls.hue, 0.0);
        assert_eq!(hls.sat, 0.0);
        assert_approx_eq!(hls.lum, 256.0 / 510.0);
    }

    #[test]
    fn saturation_above_half_luminance() {
        // max + min = 355 > 255
        let hls = Hls::from_rgb([255, 100, 100]);
        assert_approx_eq!(hls.lum, 355.0 / 510.0);
        assert_approx_eq!(hls.sat, 155.0 / 155.0);
        let hls = Hls::from_rgb([200, 150, 150]);
        assert_approx_eq!(hls.sat, 50.0 / 160.0);
    }

    #[test]
    fn hls_to_rgb_reference_chart() {
        assert_eq!(Hls::new(0.0, 0.5, 1.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Hls::new(120.0, 0.5, 1.0).to_rgb(), [0, 255, 0]);
        assert_eq!(Hls::new(240.0, 0.5, 1.0).to_rgb(), [0, 0, 255]);
        assert_eq!(Hls::new(60.0, 0.5, 1.0).to_rgb(), [255, 255, 0]);
        assert_eq!(Hls::new(180.0, 0.5, 1.0).to_rgb(), [0, 255, 255]);
        assert_eq!(Hls::new(0.0, 1.0, 1.0).to_rgb(), [255, 255, 255]);
        assert_eq!(Hls::new(0.0, 0.0, 1.0).to_rgb(), [0, 0, 0]);
        assert_eq!(Hls::new(0.0, 0.75, 0.5).to_rgb(), [223, 159, 159]);
    }

    #[test]
    fn achromatic_rounds_ties_to_even() {
        // 0.5 * 255 = 127.5
        assert_eq!(Hls::new(0.0, 0.5, 0.0).to_rgb(), [128, 128, 128]);
        assert_eq!(Hls::new(33.0, 0.3, 0.0).to_rgb(), [76, 76, 76]);
    }

    #[test]
    fn out_of_range_byte_becomes_255() {
        assert_eq!(to_byte(255.4), 255);
        assert_eq!(to_byte(255.6), 255);
        assert_eq!(to_byte(-0.4), 0);
        assert_eq!(to_byte(-3.0), 255);
        assert_eq!(to_byte(f64::NAN), 255);
    }

    #[test]
    fn hls_round_trip() {
        for &(h, l, s) in &[
            (0.0, 0.5, 1.0),
            (120.0, 0.5, 1.0),
            (200.0, 0.4, 0.6),
            (330.0, 0.7, 0.3),
            (45.0, 0.2, 0.9),
        ] {
            let rgb = Hls::new(h, l, s).to_rgb();
            let back = Hls::from_rgb(rgb);
            assert_approx_eq!(back.hue, h, eps = 0.01);
            assert_approx_eq!(back.lum, l, eps = 0.01);
            assert_approx_eq!(back.sat, s, eps = 0.02);
        }
    }

    #[test]
    fn achromatic_round_trip_keeps_luminance() {
        let c = HlsRgb::from_hls(200.0, 0.2, 0.0);
        let back = HlsRgb::from_rgba(c.to_rgba());
        assert_approx_eq!(back.luminance(), 0.2, eps = 0.01);
        assert_eq!(back.hue(), 0.0);
    }

    #[test]
    fn construction_clamps_and_wraps() {
        let c = HlsRgb::from_hls(400.0, 1.5, -0.5);
        assert_eq!(c.hue(), 40.0);
        assert_eq!(c.luminance(), 1.0);
        assert_eq!(c.saturation(), 0.0);

        assert_eq!(HlsRgb::from_hls(-90.0, 0.5, 0.5).hue(), 270.0);
        assert_eq!(HlsRgb::from_hls(360.0, 0.5, 0.5).hue(), 0.0);
    }

    #[test]
    fn pure_green_scenario() {
        let c = HlsRgb::from_hls(120.0, 0.5, 1.0);
        assert_eq!(c.red(), 0);
        assert_eq!(c.green(), 255);
        assert_eq!(c.blue(), 0);
        assert_eq!(c.alpha(), 255);
    }

    #[test]
    fn reading_other_side_keeps_authority() {
        let c = HlsRgb::from_argb(10, 255, 0, 0);
        assert!(!c.is_hls());
        assert_eq!(c.hue(), 0.0);
        assert!(!c.is_hls());
        assert_eq!(c.to_rgba(), rgba(255, 0, 0, 10));

        let c = HlsRgb::from_hls(0.5, 0.5, 1.0);
        let _ = c.to_rgba();
        assert!(c.is_hls());
        assert_eq!(c.hue(), 0.5);
    }

    #[test]
    fn writing_other_side_switches_authority() {
        let mut c = HlsRgb::from_argb(0x80, 255, 0, 0);
        c.set_hue(120.0);
        assert!(c.is_hls());
        assert_eq!(c.to_rgba(), rgba(0, 255, 0, 0x80));

        c.set_blue(255);
        assert!(!c.is_hls());
        assert_eq!(c.to_rgba(), rgba(0, 255, 255, 0x80));
        assert_eq!(c.hue(), 180.0);
    }

    #[test]
    fn achromatic_hls_forces_opaque_alpha() {
        let mut c = HlsRgb::from_argb(0x10, 255, 0, 0);
        c.set_saturation(0.0);
        assert_eq!(c.to_rgba().a(), 0xFF);
    }

    #[test]
    fn alpha_is_clamped() {
        let mut c = HlsRgb::default();
        c.set_alpha(300);
        assert_eq!(c.alpha(), 255);
        c.set_alpha(-5);
        assert_eq!(c.alpha(), 0);
        c.set_alpha(77);
        assert_eq!(c.alpha(), 77);
    }

    #[test]
    fn lighten_and_darken() {
        let mut c = HlsRgb::from_hls(0.0, 0.4, 1.0);
        c.lighten(0.5);
        assert_approx_eq!(c.luminance(), 0.6);
        c.lighten(1.0);
        assert_eq!(c.luminance(), 1.0);
        c.darken(0.25);
        assert_eq!(c.luminance(), 0.25);
        c.darken(-1.0);
        assert_eq!(c.luminance(), 0.0);
    }

    #[test]
    fn set_hls_clamps() {
        let mut c = HlsRgb::default();
        c.set_hls(Hls { hue: 720.5, lum: 2.0, sat: 0.5 });
        assert_eq!(c.to_hls(), Hls { hue: 0.5, lum: 1.0, sat: 0.5 });
    }

    #[test]
    fn debug_rgba_as_hex() {
        use alloc::format;
        assert_eq!(format!("{:?}", rgb(0xAB, 0, 0x10)), "Rgba(#AB0010FF)");
    }
}
