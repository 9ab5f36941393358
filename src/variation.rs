//! Shade, tint, and tone ladders, plus the swatch-label luminance hint.
//!
//! Each ladder has exactly ten steps at fixed interpolation factors
//! `(i + 1) / 10`, ordered from closest-to-original to most extreme:
//!
//! - shades mix toward black: `channel * (1 - f)`
//! - tints mix toward white: `channel + (255 - channel) * f`
//! - tones mix toward neutral gray: `channel * (1 - f) + 128 * f`
//!
//! Channels round at the final integer cast, never truncate.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Number of steps per ladder; step `i` uses factor `(i + 1) / 10`.
pub const LADDER_STEPS: usize = 10;

/// The neutral gray channel value tones mix toward.
const TONE_GRAY: f64 = 128.0;

/// The three variation ladders derived from one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variations {
    /// Toward black, closest first
    pub shades: [Color; LADDER_STEPS],
    /// Toward white, closest first
    pub tints: [Color; LADDER_STEPS],
    /// Toward rgb(128, 128, 128), closest first
    pub tones: [Color; LADDER_STEPS],
}

/// Round a 0..255-scale channel once, at the end of the interpolation.
#[inline]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn ladder(color: Color, step: impl Fn(f64, f64) -> f64) -> [Color; LADDER_STEPS] {
    std::array::from_fn(|i| {
        let f = (i + 1) as f64 * 0.1;
        Color::new(
            round_channel(step(color.r as f64, f)),
            round_channel(step(color.g as f64, f)),
            round_channel(step(color.b as f64, f)),
        )
    })
}

/// Derive the shade, tint, and tone ladders for a color.
///
/// # Example
/// ```
/// use huekit::{variations, Color};
///
/// let gray: Color = "#808080".parse().unwrap();
/// let ladders = variations(gray);
/// // Mixing gray with gray is a no-op at every step.
/// assert!(ladders.tones.iter().all(|&c| c == gray));
/// assert_eq!(ladders.shades.len(), 10);
/// ```
pub fn variations(color: Color) -> Variations {
    Variations {
        shades: ladder(color, |ch, f| ch * (1.0 - f)),
        tints: ladder(color, |ch, f| ch + (255.0 - ch) * f),
        tones: ladder(color, |ch, f| ch * (1.0 - f) + TONE_GRAY * f),
    }
}

/// Which text color stays legible on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextTone {
    /// The swatch is light; use dark text.
    Dark,
    /// The swatch is dark; use light text.
    Light,
}

/// Perceived luminance of a color in `0.0..=1.0`.
///
/// Uses the Rec. 601 luma weights `(0.299 R + 0.587 G + 0.114 B) / 255`.
/// This is a presentation hint for picking label colors on swatches; it is
/// NOT a WCAG contrast computation and must not be used for accessibility
/// compliance claims.
#[inline]
pub fn relative_luminance(color: Color) -> f64 {
    (0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64) / 255.0
}

/// Text color policy for a swatch background: luminance above 0.5 takes
/// dark text, everything else takes light text.
///
/// Same caveat as [`relative_luminance`]: a layout heuristic, not an
/// accessibility guarantee.
#[inline]
pub fn text_tone(color: Color) -> TextTone {
    if relative_luminance(color) > 0.5 {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}
