//! Harmony families by hue rotation.
//!
//! Each family rotates the anchor color's hue on the HSL wheel while holding
//! saturation and lightness fixed. Rotation uses a true modulo, so negative
//! offsets wrap into `[0, 360)` (rotating hue 10 by -30 lands on 340).

use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl};

/// The harmony families the engine can derive from an anchor color.
///
/// `Tetradic` and `Square` are intentionally the same 0/90/180/270 rotation
/// set, matching the behavior consumers of the original tool rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyFamily {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Square,
}

impl HarmonyFamily {
    /// All families, in presentation order.
    pub const ALL: [HarmonyFamily; 6] = [
        HarmonyFamily::Complementary,
        HarmonyFamily::Analogous,
        HarmonyFamily::Triadic,
        HarmonyFamily::SplitComplementary,
        HarmonyFamily::Tetradic,
        HarmonyFamily::Square,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            HarmonyFamily::Complementary => "complementary",
            HarmonyFamily::Analogous => "analogous",
            HarmonyFamily::Triadic => "triadic",
            HarmonyFamily::SplitComplementary => "split complementary",
            HarmonyFamily::Tetradic => "tetradic",
            HarmonyFamily::Square => "square",
        }
    }
}

/// An ordered set of related colors for one harmony family.
///
/// The anchor color sits at index 0 for every family except `Analogous`,
/// where it sits between its two neighbors at index 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySet {
    pub family: HarmonyFamily,
    pub colors: Vec<Color>,
}

/// Rotate a color's hue by the given number of degrees, holding saturation
/// and lightness fixed.
///
/// # Example
/// ```
/// use huekit::{harmony::rotate, Color};
///
/// let orange: Color = "#FF6600".parse().unwrap();
/// assert_eq!(rotate(orange, 180.0).to_string(), "#0099FF");
/// ```
pub fn rotate(color: Color, degrees: f64) -> Color {
    let hsl = Hsl::from(color);
    hsl.with_hue(hsl.h + degrees).to_color()
}

/// Derive the given harmony family from an anchor color.
///
/// # Example
/// ```
/// use huekit::{harmony, Color, HarmonyFamily};
///
/// let orange: Color = "#FF6600".parse().unwrap();
/// let set = harmony(orange, HarmonyFamily::Triadic);
/// assert_eq!(set.colors.len(), 3);
/// assert_eq!(set.colors[0], orange);
/// ```
pub fn harmony(color: Color, family: HarmonyFamily) -> HarmonySet {
    let colors = match family {
        HarmonyFamily::Complementary => vec![color, rotate(color, 180.0)],
        HarmonyFamily::Analogous => {
            vec![rotate(color, -30.0), color, rotate(color, 30.0)]
        }
        HarmonyFamily::Triadic => {
            vec![color, rotate(color, 120.0), rotate(color, 240.0)]
        }
        HarmonyFamily::SplitComplementary => {
            vec![color, rotate(color, 150.0), rotate(color, 210.0)]
        }
        HarmonyFamily::Tetradic | HarmonyFamily::Square => vec![
            color,
            rotate(color, 90.0),
            rotate(color, 180.0),
            rotate(color, 270.0),
        ],
    };
    HarmonySet { family, colors }
}
