//! CIE L*a*b* (1976) and Hunter Lab (1948) color spaces
//!
//! Both are derived from XYZ against the D65 reference white
//! (Xn = 95.047, Yn = 100.0, Zn = 108.883), so a neutral gray lands at
//! a = b = 0 in either space. CIE Lab uses the piecewise cube-root helper
//! with its breakpoint at (6/29)^3; Hunter Lab uses the 1948 square-root
//! formulas with the parametric Ka/Kb scaling constants evaluated for D65.

use std::fmt;

use super::round2;
use super::rgb::Color;
use super::xyz::Xyz;

/// D65 reference white, XYZ on the 0..100 scale.
pub(crate) const D65_XN: f64 = 95.047;
pub(crate) const D65_YN: f64 = 100.0;
pub(crate) const D65_ZN: f64 = 108.883;

/// CIE Lab helper breakpoint, (6/29)^3.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
/// 6/29, used by the linear branch of the helper and its inverse.
const LAB_DELTA: f64 = 6.0 / 29.0;

/// Piecewise cube-root helper for the XYZ -> CIE Lab transform.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

/// Inverse of [`lab_f`].
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}

/// Hunter Ka scaling constant for a given white point.
#[inline]
fn hunter_ka() -> f64 {
    175.0 / 198.04 * (D65_XN + D65_YN)
}

/// Hunter Kb scaling constant for a given white point.
#[inline]
fn hunter_kb() -> f64 {
    70.0 / 218.11 * (D65_YN + D65_ZN)
}

/// A color in CIE L*a*b* (D65).
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
///
/// Canonical formatted output is `CIE-Lab(L, a, b)` at two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl CieLab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert back to an 8-bit sRGB color via XYZ.
    pub fn to_color(self) -> Color {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        Xyz::new(
            lab_f_inv(fx) * D65_XN,
            lab_f_inv(fy) * D65_YN,
            lab_f_inv(fz) * D65_ZN,
        )
        .to_color()
    }
}

impl From<Color> for CieLab {
    fn from(color: Color) -> Self {
        let xyz = Xyz::from(color);
        let fx = lab_f(xyz.x / D65_XN);
        let fy = lab_f(xyz.y / D65_YN);
        let fz = lab_f(xyz.z / D65_ZN);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl fmt::Display for CieLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CIE-Lab({:.2}, {:.2}, {:.2})",
            round2(self.l),
            round2(self.a),
            round2(self.b)
        )
    }
}

/// A color in Hunter Lab (D65).
///
/// Zero luminance forces `a = b = 0`: the shared `sqrt(Y/Yn)` denominator
/// vanishes there, so the branch is explicit rather than a NaN.
///
/// Canonical formatted output is `Hunter Lab(L, a, b)` at two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl HunterLab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert back to an 8-bit sRGB color via XYZ.
    pub fn to_color(self) -> Color {
        if self.l <= 0.0 {
            return Color::new(0, 0, 0);
        }
        let sqrt_yr = self.l / 100.0;
        let yr = sqrt_yr * sqrt_yr;
        let xr = self.a * sqrt_yr / hunter_ka() + yr;
        let zr = yr - self.b * sqrt_yr / hunter_kb();
        Xyz::new(xr * D65_XN, yr * D65_YN, zr * D65_ZN).to_color()
    }
}

impl From<Color> for HunterLab {
    fn from(color: Color) -> Self {
        let xyz = Xyz::from(color);
        let xr = xyz.x / D65_XN;
        let yr = xyz.y / D65_YN;
        let zr = xyz.z / D65_ZN;
        if yr <= 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let sqrt_yr = yr.sqrt();
        Self {
            l: 100.0 * sqrt_yr,
            a: hunter_ka() * ((xr - yr) / sqrt_yr),
            b: hunter_kb() * ((yr - zr) / sqrt_yr),
        }
    }
}

impl fmt::Display for HunterLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hunter Lab({:.2}, {:.2}, {:.2})",
            round2(self.l),
            round2(self.a),
            round2(self.b)
        )
    }
}
