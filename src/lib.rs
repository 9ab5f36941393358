//! huekit: a color science engine
//!
//! The deterministic, stateless computation layer behind a color exploration
//! tool. Given a color (or an image), it produces derived representations
//! with no side effects and no hidden state beyond a static reference
//! dataset loaded once:
//!
//! - **Conversions**: 8-bit sRGB to and from HSL, HSV, CMYK, CIE XYZ, Yxy,
//!   Hunter Lab, and CIE Lab, with canonical string formatting per space
//! - **Harmonies**: complementary, analogous, triadic, split-complementary,
//!   tetradic/square sets by hue rotation
//! - **Variations**: ten-step shade, tint, and tone ladders
//! - **Naming**: nearest-name lookup against a reference table
//! - **Palette extraction**: median-cut quantization of raw pixel buffers
//!
//! # Quick Start
//!
//! ```
//! use huekit::{convert, harmony, variations, Color, ColorSpace, HarmonyFamily};
//!
//! let color: Color = "#FF6600".parse()?;
//!
//! assert_eq!(convert(color, ColorSpace::Hsl), "hsl(24deg, 100%, 50%)");
//! assert_eq!(convert(color, ColorSpace::Cmyk), "cmyk(0%, 60%, 100%, 0%)");
//!
//! let complement = harmony(color, HarmonyFamily::Complementary);
//! assert_eq!(complement.colors[0], color);
//!
//! let ladders = variations(color);
//! assert_eq!(ladders.shades.len(), 10);
//! # Ok::<(), huekit::ParseColorError>(())
//! ```
//!
//! # Precision Contract
//!
//! [`Color`] (three `u8` channels) is the single source of truth; every
//! derived space is computed on demand in full `f64` precision and never
//! stored. Converting to any space and back reproduces the original integer
//! channels exactly, because rounding happens only at the final integer
//! cast. Formatted output rounds to a fixed precision per space (integers
//! for RGB/HSL/HSV/CMYK, two decimals for the XYZ/Yxy/Lab families), so two
//! engines fed the same color produce byte-identical strings.
//!
//! # Determinism
//!
//! Every operation is a pure function of its arguments. The one sanctioned
//! exception is [`Palette::pick_representative`], which takes a
//! caller-injected [`rand::Rng`] because the consuming UI wants a fresh
//! suggestion on repeat calls; quantization itself is bit-deterministic.
//!
//! # Errors
//!
//! Malformed hex input, degenerate pixel buffers, and a missing reference
//! dataset are the only failure modes, each a typed error
//! ([`ParseColorError`], [`ImageError`], [`DatasetError`]); conversions on a
//! valid [`Color`] are total functions. The engine never panics on external
//! input.

pub mod color;
pub mod error;
pub mod extract;
pub mod harmony;
pub mod namer;
pub mod variation;


pub use color::{
    convert, CieLab, Cmyk, Color, ColorSpace, Hsl, Hsv, HunterLab, Xyz, Yxy,
};
pub use error::{DatasetError, EngineError, ImageError, ParseColorError};
pub use extract::{Palette, PaletteExtractor, PixelFormat, Swatch};
pub use harmony::{harmony, rotate, HarmonyFamily, HarmonySet};
pub use namer::{ColorNamer, NameDataset, NamedColor};
pub use variation::{relative_luminance, text_tone, variations, TextTone, Variations};
