//! Color representations and conversions.
//!
//! [`Color`] (8-bit sRGB) is the anchor type; every other space is derived
//! from it on demand. The derived structs keep full `f64` precision so that
//! `Color -> space -> Color` round trips are exact; each struct's `Display`
//! applies the canonical formatted output of the engine:
//!
//! | Space | Format |
//! |-------|--------|
//! | RGB | `rgb(R, G, B)` |
//! | HSL | `hsl(Hdeg, S%, L%)` |
//! | HSV | `hsv(Hdeg, S%, V%)` |
//! | CMYK | `cmyk(C%, M%, Y%, K%)` |
//! | XYZ | `XYZ(x, y, z)` |
//! | Yxy | `Yxy(Y, x, y)` |
//! | Hunter Lab | `Hunter Lab(L, a, b)` |
//! | CIE Lab | `CIE-Lab(L, a, b)` |
//!
//! Percent and degree channels round to integers; the XYZ/Yxy/Lab families
//! round to two decimals. Two engines fed the same `Color` produce
//! byte-identical strings.

pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod xyz;

use serde::{Deserialize, Serialize};

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{CieLab, HunterLab};
pub use rgb::Color;
pub use xyz::{Xyz, Yxy};

/// Round to two decimals for display, normalizing negative zero so that
/// values like -5e-15 print as `0.00` rather than `-0.00`.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// A fraction in `0.0..=1.0` as a rounded integer percent.
#[inline]
pub(crate) fn percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// A hue in degrees as a rounded integer in `0..360` (360 wraps to 0).
#[inline]
pub(crate) fn hue_degrees(h: f64) -> u16 {
    (h.round().rem_euclid(360.0)) as u16
}

/// The color spaces the engine can format a [`Color`] into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Xyz,
    Yxy,
    HunterLab,
    CieLab,
}

/// Format a color in the canonical string form of the given space.
///
/// # Example
/// ```
/// use huekit::{convert, Color, ColorSpace};
///
/// let orange: Color = "#FF6600".parse().unwrap();
/// assert_eq!(convert(orange, ColorSpace::Rgb), "rgb(255, 102, 0)");
/// assert_eq!(convert(orange, ColorSpace::Hsl), "hsl(24deg, 100%, 50%)");
/// assert_eq!(convert(orange, ColorSpace::Cmyk), "cmyk(0%, 60%, 100%, 0%)");
/// ```
pub fn convert(color: Color, space: ColorSpace) -> String {
    match space {
        ColorSpace::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
        ColorSpace::Hsl => Hsl::from(color).to_string(),
        ColorSpace::Hsv => Hsv::from(color).to_string(),
        ColorSpace::Cmyk => Cmyk::from(color).to_string(),
        ColorSpace::Xyz => Xyz::from(color).to_string(),
        ColorSpace::Yxy => Yxy::from(color).to_string(),
        ColorSpace::HunterLab => HunterLab::from(color).to_string(),
        ColorSpace::CieLab => CieLab::from(color).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_dispatch() {
        let black = Color::new(0, 0, 0);
        assert_eq!(convert(black, ColorSpace::Rgb), "rgb(0, 0, 0)");
        assert_eq!(convert(black, ColorSpace::Hsl), "hsl(0deg, 0%, 0%)");
        assert_eq!(convert(black, ColorSpace::Hsv), "hsv(0deg, 0%, 0%)");
        assert_eq!(convert(black, ColorSpace::Cmyk), "cmyk(0%, 0%, 0%, 100%)");
        assert_eq!(convert(black, ColorSpace::Xyz), "XYZ(0.00, 0.00, 0.00)");
        assert_eq!(convert(black, ColorSpace::Yxy), "Yxy(0.00, 0.00, 0.00)");
        assert_eq!(
            convert(black, ColorSpace::HunterLab),
            "Hunter Lab(0.00, 0.00, 0.00)"
        );
        assert_eq!(
            convert(black, ColorSpace::CieLab),
            "CIE-Lab(0.00, 0.00, 0.00)"
        );
    }

    #[test]
    fn test_round2_normalizes_negative_zero() {
        assert_eq!(round2(-0.0000001).to_string(), "0");
        assert_eq!(format!("{:.2}", round2(-0.0000001)), "0.00");
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(-1.237), -1.24);
    }

    #[test]
    fn test_percent_rounds_not_truncates() {
        assert_eq!(percent(0.599), 60);
        assert_eq!(percent(0.594), 59);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(0.0), 0);
    }

    #[test]
    fn test_hue_degrees_wraps() {
        assert_eq!(hue_degrees(359.7), 0);
        assert_eq!(hue_degrees(0.2), 0);
        assert_eq!(hue_degrees(204.0), 204);
    }
}
