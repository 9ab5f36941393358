//! HSV (hue, saturation, value) color space

use std::fmt;

use super::{hue_degrees, percent};
use super::rgb::Color;

/// A color in HSV space.
///
/// - `h`: hue in degrees, normalized to `[0, 360)`
/// - `s`: saturation as a fraction, `0.0..=1.0`
/// - `v`: value as a fraction, `0.0..=1.0`
///
/// Canonical formatted output is `hsv(Hdeg, S%, V%)` with integer-rounded
/// channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create an HSV color; the hue wraps into `[0, 360)`.
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s,
            v,
        }
    }

    /// Convert back to an 8-bit sRGB color, rounding once.
    pub fn to_color(self) -> Color {
        let c = self.v * self.s;
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
        let m = self.v - c;
        Color::from_channels_f64(r1 + m, g1 + m, b1 + m)
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.channels_f64();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}deg, {}%, {}%)",
            hue_degrees(self.h),
            percent(self.s),
            percent(self.v)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let orange = Hsv::from(Color::new(255, 102, 0));
        assert!((orange.h - 24.0).abs() < 1e-9);
        assert!((orange.s - 1.0).abs() < 1e-12);
        assert!((orange.v - 1.0).abs() < 1e-12);
        assert_eq!(orange.to_string(), "hsv(24deg, 100%, 100%)");
    }

    #[test]
    fn test_black_is_total() {
        let black = Hsv::from(Color::new(0, 0, 0));
        assert_eq!(black.h, 0.0);
        assert_eq!(black.s, 0.0);
        assert_eq!(black.v, 0.0);
    }

    #[test]
    fn test_round_trip_exact() {
        for r in (0u16..=255).step_by(17) {
            for g in (0u16..=255).step_by(17) {
                for b in (0u16..=255).step_by(17) {
                    let color = Color::new(r as u8, g as u8, b as u8);
                    assert_eq!(Hsv::from(color).to_color(), color);
                }
            }
        }
    }
}
