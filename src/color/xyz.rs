//! CIE 1931 XYZ and Yxy chromaticity spaces
//!
//! sRGB decodes to linear light through the standard IEC 61966-2-1 piecewise
//! gamma, then the D65 sRGB matrix maps linear RGB to XYZ. Components are
//! carried on the conventional 0..100 scale and kept in full precision; the
//! two-decimal presentation is applied only by `Display`.

use std::fmt;

use super::round2;
use super::rgb::Color;

/// sRGB to XYZ matrix (D65 white point), row-major.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to sRGB matrix (D65 white point), row-major.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Decode one gamma-corrected sRGB channel to linear light.
#[inline]
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel back to gamma-corrected sRGB.
#[inline]
pub(crate) fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in CIE XYZ, scaled so that the D65 white point has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert back to an 8-bit sRGB color.
    ///
    /// Out-of-gamut values are clamped at the final integer cast.
    pub fn to_color(self) -> Color {
        let (x, y, z) = (self.x / 100.0, self.y / 100.0, self.z / 100.0);
        let r = XYZ_TO_SRGB[0][0] * x + XYZ_TO_SRGB[0][1] * y + XYZ_TO_SRGB[0][2] * z;
        let g = XYZ_TO_SRGB[1][0] * x + XYZ_TO_SRGB[1][1] * y + XYZ_TO_SRGB[1][2] * z;
        let b = XYZ_TO_SRGB[2][0] * x + XYZ_TO_SRGB[2][1] * y + XYZ_TO_SRGB[2][2] * z;
        Color::from_channels_f64(
            linear_to_srgb(r.max(0.0)),
            linear_to_srgb(g.max(0.0)),
            linear_to_srgb(b.max(0.0)),
        )
    }

    /// Derive Yxy chromaticity coordinates.
    ///
    /// The degenerate `X + Y + Z = 0` case (black) maps to `x = y = 0`;
    /// defined behavior, not an error.
    pub fn to_yxy(self) -> Yxy {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return Yxy::new(self.y, 0.0, 0.0);
        }
        Yxy::new(self.y, self.x / sum, self.y / sum)
    }
}

impl From<Color> for Xyz {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.channels_f64();
        let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
        Self {
            x: 100.0 * (SRGB_TO_XYZ[0][0] * r + SRGB_TO_XYZ[0][1] * g + SRGB_TO_XYZ[0][2] * b),
            y: 100.0 * (SRGB_TO_XYZ[1][0] * r + SRGB_TO_XYZ[1][1] * g + SRGB_TO_XYZ[1][2] * b),
            z: 100.0 * (SRGB_TO_XYZ[2][0] * r + SRGB_TO_XYZ[2][1] * g + SRGB_TO_XYZ[2][2] * b),
        }
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XYZ({:.2}, {:.2}, {:.2})",
            round2(self.x),
            round2(self.y),
            round2(self.z)
        )
    }
}

/// A color in Yxy: luminance Y (0..100 scale) plus chromaticity x, y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yxy {
    /// Luminance, same scale as [`Xyz::y`]
    pub luminance: f64,
    /// Chromaticity x
    pub x: f64,
    /// Chromaticity y
    pub y: f64,
}

impl Yxy {
    #[inline]
    pub fn new(luminance: f64, x: f64, y: f64) -> Self {
        Self { luminance, x, y }
    }

    /// Convert back to an 8-bit sRGB color via XYZ.
    pub fn to_color(self) -> Color {
        if self.y == 0.0 {
            // Degenerate chromaticity only arises from zero-energy input
            return Xyz::new(0.0, self.luminance, 0.0).to_color();
        }
        let x_cap = self.x * self.luminance / self.y;
        let z_cap = (1.0 - self.x - self.y) * self.luminance / self.y;
        Xyz::new(x_cap, self.luminance, z_cap).to_color()
    }
}

impl From<Color> for Yxy {
    fn from(color: Color) -> Self {
        Xyz::from(color).to_yxy()
    }
}

impl fmt::Display for Yxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Yxy({:.2}, {:.2}, {:.2})",
            round2(self.luminance),
            round2(self.x),
            round2(self.y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_hits_d65_reference() {
        let white = Xyz::from(Color::new(255, 255, 255));
        assert!((white.x - 95.047).abs() < 0.01, "X = {}", white.x);
        assert!((white.y - 100.0).abs() < 0.01, "Y = {}", white.y);
        assert!((white.z - 108.883).abs() < 0.01, "Z = {}", white.z);
    }

    #[test]
    fn test_black_is_origin() {
        let black = Xyz::from(Color::new(0, 0, 0));
        assert_eq!(black.x, 0.0);
        assert_eq!(black.y, 0.0);
        assert_eq!(black.z, 0.0);
    }

    #[test]
    fn test_yxy_degenerate_black() {
        let yxy = Yxy::from(Color::new(0, 0, 0));
        assert_eq!(yxy.luminance, 0.0);
        assert_eq!(yxy.x, 0.0);
        assert_eq!(yxy.y, 0.0);
        assert!(!yxy.x.is_nan() && !yxy.y.is_nan());
        assert_eq!(yxy.to_color(), Color::new(0, 0, 0));
    }

    #[test]
    fn test_display_two_decimals() {
        let orange = Xyz::from(Color::new(255, 102, 0));
        let formatted = orange.to_string();
        assert!(formatted.starts_with("XYZ("), "{formatted}");
        // Two fractional digits per component
        for part in formatted
            .trim_start_matches("XYZ(")
            .trim_end_matches(')')
            .split(", ")
        {
            let (_, frac) = part.split_once('.').expect("missing decimal point");
            assert_eq!(frac.len(), 2, "{formatted}");
        }
        assert_eq!(
            Xyz::from(Color::new(0, 0, 0)).to_string(),
            "XYZ(0.00, 0.00, 0.00)"
        );
    }

    #[test]
    fn test_round_trip_exact() {
        for r in (0u16..=255).step_by(17) {
            for g in (0u16..=255).step_by(17) {
                for b in (0u16..=255).step_by(17) {
                    let color = Color::new(r as u8, g as u8, b as u8);
                    assert_eq!(Xyz::from(color).to_color(), color, "xyz failed for {color}");
                    assert_eq!(Yxy::from(color).to_color(), color, "yxy failed for {color}");
                }
            }
        }
    }

    #[test]
    fn test_gamma_breakpoints() {
        // Values below the linear segment breakpoint use the 12.92 divisor
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() < 1e-12);
        // Mid-gray: ((0.5 + 0.055) / 1.055)^2.4 = 0.21404...
        assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-5);
        // Encode is the inverse
        assert!((linear_to_srgb(srgb_to_linear(0.73)) - 0.73).abs() < 1e-12);
    }
}
