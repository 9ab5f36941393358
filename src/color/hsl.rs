//! HSL (hue, saturation, lightness) color space
//!
//! The cylindrical model used for hue rotation: harmony families rotate the
//! hue channel while saturation and lightness stay fixed. Components are
//! kept in full `f64` precision; the integer-percent presentation is applied
//! only by the `Display` implementation.

use std::fmt;

use super::{hue_degrees, percent};
use super::rgb::Color;

/// A color in HSL space.
///
/// - `h`: hue in degrees, normalized to `[0, 360)`
/// - `s`: saturation as a fraction, `0.0..=1.0`
/// - `l`: lightness as a fraction, `0.0..=1.0`
///
/// The canonical formatted output is `hsl(Hdeg, S%, L%)` with hue and the
/// percent channels rounded (not truncated) to integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. The hue is reduced into `[0, 360)` with a true
    /// modulo, so negative inputs wrap (e.g. -20 becomes 340).
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        }
    }

    /// Same color with the hue replaced (and normalized into `[0, 360)`).
    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Convert back to an 8-bit sRGB color.
    ///
    /// Rounding to integer channels happens only here; a `Color -> Hsl ->
    /// Color` round trip reproduces the original channels exactly.
    pub fn to_color(self) -> Color {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        Color::from_channels_f64(r1 + m, g1 + m, b1 + m)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.channels_f64();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}deg, {}%, {}%)",
            hue_degrees(self.h),
            percent(self.s),
            percent(self.l)
        )
    }
}
