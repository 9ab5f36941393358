//! CMYK (cyan, magenta, yellow, key) ink model

use std::fmt;

use super::percent;
use super::rgb::Color;

/// A color in CMYK, each channel a fraction in `0.0..=1.0`.
///
/// Pure black is `cmyk(0%, 0%, 0%, 100%)` by convention: the K=1 branch
/// short-circuits before the `1 - K` division can hit zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[inline]
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Convert back to an 8-bit sRGB color, rounding once.
    pub fn to_color(self) -> Color {
        Color::from_channels_f64(
            (1.0 - self.c) * (1.0 - self.k),
            (1.0 - self.m) * (1.0 - self.k),
            (1.0 - self.y) * (1.0 - self.k),
        )
    }
}

impl From<Color> for Cmyk {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.channels_f64();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            // Pure black
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }
        Self {
            c: (1.0 - r - k) / (1.0 - k),
            m: (1.0 - g - k) / (1.0 - k),
            y: (1.0 - b - k) / (1.0 - k),
            k,
        }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            percent(self.c),
            percent(self.m),
            percent(self.y),
            percent(self.k)
        )
    }
}
