//! Palette extraction from raw pixel buffers.
//!
//! [`PaletteExtractor`] reduces an image to a bounded-size representative
//! palette: histogram, median-cut quantization, population-ordered output.
//! Quantization is bit-deterministic for identical input; the only
//! sanctioned nondeterminism is [`Palette::pick_representative`], which
//! takes a caller-injected RNG so the UI gets a fresh suggestion per call
//! while tests stay reproducible with a seeded generator.

mod histogram;
mod median_cut;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ImageError;

/// Channel bound below which a color counts as near-black (exclusive).
const NEAR_BLACK_MAX: u8 = 30;
/// Channel bound above which a color counts as near-white (exclusive).
const NEAR_WHITE_MIN: u8 = 225;

/// Pixel layout of the input buffer. The alpha byte of RGBA is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// One extracted palette entry with the pixel population of its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub color: Color,
    pub population: u64,
}

/// An extracted palette, ordered by descending cluster population.
///
/// The ordering is an observable contract: downstream consumers treat the
/// first entry as the most representative color of the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

fn is_near_black(color: Color) -> bool {
    color.r < NEAR_BLACK_MAX && color.g < NEAR_BLACK_MAX && color.b < NEAR_BLACK_MAX
}

fn is_near_white(color: Color) -> bool {
    color.r > NEAR_WHITE_MIN && color.g > NEAR_WHITE_MIN && color.b > NEAR_WHITE_MIN
}

impl Palette {
    /// The swatches in extraction order (largest cluster first).
    #[inline]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Just the colors, in extraction order.
    pub fn colors(&self) -> Vec<Color> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Suggest one accent color from the palette.
    ///
    /// Near-black and near-white entries are filtered out first; the pick is
    /// uniform among the survivors. When nothing survives the filter, the
    /// pick falls back to the full unfiltered palette. Returns `None` only
    /// for an empty palette.
    ///
    /// # Example
    /// ```
    /// use huekit::{PaletteExtractor, PixelFormat};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let pixels = [200u8, 40, 40, 200, 40, 40, 10, 10, 10];
    /// let palette = PaletteExtractor::new()
    ///     .extract(&pixels, 3, 1, PixelFormat::Rgb)
    ///     .unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let pick = palette.pick_representative(&mut rng).unwrap();
    /// // The near-black cluster is filtered out of the suggestion.
    /// assert_eq!(pick.to_string(), "#C82828");
    /// ```
    pub fn pick_representative<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        let candidates: Vec<Color> = self
            .swatches
            .iter()
            .map(|s| s.color)
            .filter(|&c| !is_near_black(c) && !is_near_white(c))
            .collect();

        if candidates.is_empty() {
            let all: Vec<Color> = self.colors();
            all.choose(rng).copied()
        } else {
            candidates.choose(rng).copied()
        }
    }
}

/// Reduces an image to a representative palette via median-cut quantization.
///
/// # Example
/// ```
/// use huekit::{PaletteExtractor, PixelFormat};
///
/// // 2x2 image: three red pixels, one blue
/// let pixels = [
///     200u8, 30, 30, 200, 30, 30,
///     200, 30, 30, 30, 30, 200,
/// ];
/// let palette = PaletteExtractor::new()
///     .max_colors(2)
///     .extract(&pixels, 2, 2, PixelFormat::Rgb)
///     .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// // Largest cluster first
/// assert_eq!(palette.swatches()[0].population, 3);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    max_colors: usize,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Default palette size.
    pub const DEFAULT_MAX_COLORS: usize = 6;

    pub fn new() -> Self {
        Self {
            max_colors: Self::DEFAULT_MAX_COLORS,
        }
    }

    /// Set the target palette size. Values below 1 are clamped to 1.
    pub fn max_colors(mut self, k: usize) -> Self {
        self.max_colors = k.max(1);
        self
    }

    /// Extract a palette from a raw pixel buffer.
    ///
    /// The palette holds at most the configured number of colors; an image
    /// with fewer distinct colors yields fewer entries (a single-color image
    /// yields exactly one).
    ///
    /// # Errors
    ///
    /// - [`ImageError::EmptyBuffer`] for a zero-length buffer
    /// - [`ImageError::ZeroDimensions`] when either dimension is 0
    /// - [`ImageError::SizeMismatch`] when the buffer length does not equal
    ///   `width * height * bytes_per_pixel`
    pub fn extract(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Palette, ImageError> {
        if pixels.is_empty() {
            return Err(ImageError::EmptyBuffer);
        }
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimensions { width, height });
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                len: pixels.len(),
                expected,
                width,
                height,
            });
        }

        let mut entries = histogram::build(pixels, format.bytes_per_pixel());
        let buckets = median_cut::quantize(&mut entries, self.max_colors);

        // Distinct buckets can still average to the same color; keep the
        // first (most populous) occurrence of each.
        let mut swatches: Vec<Swatch> = Vec::with_capacity(buckets.len());
        for (bytes, pop) in buckets {
            let color = Color::from_bytes(bytes);
            if !swatches.iter().any(|s| s.color == color) {
                swatches.push(Swatch {
                    color,
                    population: pop,
                });
            }
        }

        tracing::debug!(
            distinct = entries.len(),
            colors = swatches.len(),
            requested = self.max_colors,
            "palette extracted"
        );
        Ok(Palette { swatches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Deterministic synthetic test image: `count` pixels cycling through a
    /// fixed set of colors with uneven weights.
    fn checker_pixels() -> Vec<u8> {
        let mut pixels = Vec::new();
        for i in 0..64u32 {
            let color: [u8; 3] = match i % 4 {
                0 | 1 => [220, 50, 40],
                2 => [40, 180, 90],
                _ => [30, 60, 200],
            };
            pixels.extend_from_slice(&color);
        }
        pixels
    }

    #[test]
    fn test_validation_errors() {
        let extractor = PaletteExtractor::new();
        assert_eq!(
            extractor.extract(&[], 0, 0, PixelFormat::Rgb),
            Err(ImageError::EmptyBuffer)
        );
        assert_eq!(
            extractor.extract(&[1, 2, 3], 0, 1, PixelFormat::Rgb),
            Err(ImageError::ZeroDimensions {
                width: 0,
                height: 1
            })
        );
        assert_eq!(
            extractor.extract(&[1, 2, 3, 4], 2, 2, PixelFormat::Rgb),
            Err(ImageError::SizeMismatch {
                len: 4,
                expected: 12,
                width: 2,
                height: 2,
            })
        );
    }

    #[test]
    fn test_single_color_image() {
        let pixels = [77u8, 88, 99].repeat(16);
        let palette = PaletteExtractor::new()
            .extract(&pixels, 4, 4, PixelFormat::Rgb)
            .unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.swatches()[0].color, Color::new(77, 88, 99));
        assert_eq!(palette.swatches()[0].population, 16);
    }

    #[test]
    fn test_population_ordering() {
        let palette = PaletteExtractor::new()
            .max_colors(3)
            .extract(&checker_pixels(), 8, 8, PixelFormat::Rgb)
            .unwrap();
        assert_eq!(palette.len(), 3);
        // The doubled-up red cluster dominates
        assert_eq!(palette.swatches()[0].color, Color::new(220, 50, 40));
        assert_eq!(palette.swatches()[0].population, 32);
        let populations: Vec<u64> = palette.swatches().iter().map(|s| s.population).collect();
        let mut sorted = populations.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(populations, sorted);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let pixels = checker_pixels();
        let extractor = PaletteExtractor::new().max_colors(4);
        let first = extractor.extract(&pixels, 8, 8, PixelFormat::Rgb).unwrap();
        let second = extractor.extract(&pixels, 8, 8, PixelFormat::Rgb).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rgba_alpha_ignored() {
        let mut pixels = Vec::new();
        for alpha in [0u8, 128, 255, 42] {
            pixels.extend_from_slice(&[10, 200, 100, alpha]);
        }
        let palette = PaletteExtractor::new()
            .extract(&pixels, 4, 1, PixelFormat::Rgba)
            .unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.swatches()[0].population, 4);
    }

    #[test]
    fn test_pick_filters_near_black_and_white() {
        let palette = Palette {
            swatches: vec![
                Swatch {
                    color: Color::new(10, 10, 10),
                    population: 100,
                },
                Swatch {
                    color: Color::new(240, 240, 240),
                    population: 80,
                },
                Swatch {
                    color: Color::new(200, 60, 40),
                    population: 1,
                },
            ],
        };
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(
                palette.pick_representative(&mut rng),
                Some(Color::new(200, 60, 40))
            );
        }
    }

    #[test]
    fn test_pick_falls_back_to_full_palette() {
        let palette = Palette {
            swatches: vec![
                Swatch {
                    color: Color::new(5, 5, 5),
                    population: 10,
                },
                Swatch {
                    color: Color::new(250, 250, 250),
                    population: 5,
                },
            ],
        };
        let mut rng = StdRng::seed_from_u64(2);
        let pick = palette.pick_representative(&mut rng).unwrap();
        assert!(
            pick == Color::new(5, 5, 5) || pick == Color::new(250, 250, 250),
            "fallback must come from the unfiltered palette"
        );
    }

    #[test]
    fn test_pick_seeded_rng_reproducible() {
        let palette = PaletteExtractor::new()
            .extract(&checker_pixels(), 8, 8, PixelFormat::Rgb)
            .unwrap();
        let first = palette.pick_representative(&mut StdRng::seed_from_u64(99));
        let second = palette.pick_representative(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_boundary_colors_survive_filter() {
        // Channel exactly 30 is not near-black; exactly 225 is not near-white
        assert!(!is_near_black(Color::new(30, 0, 0)));
        assert!(is_near_black(Color::new(29, 29, 29)));
        assert!(!is_near_white(Color::new(225, 255, 255)));
        assert!(is_near_white(Color::new(226, 226, 226)));
    }
}
