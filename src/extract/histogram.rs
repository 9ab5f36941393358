//! Deterministic color histogram over raw pixel buffers.

use std::collections::HashMap;

/// Count distinct colors in a pixel buffer.
///
/// Counting goes through a hash map, whose iteration order is not stable, so
/// the result is sorted by channel key before it leaves this function. Every
/// downstream quantization step sees the same input order for the same
/// buffer; determinism of the final palette depends on this.
///
/// `bytes_per_pixel` is 3 for RGB and 4 for RGBA; the alpha byte, when
/// present, is ignored.
pub(crate) fn build(pixels: &[u8], bytes_per_pixel: usize) -> Vec<([u8; 3], u32)> {
    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
    for chunk in pixels.chunks_exact(bytes_per_pixel) {
        *counts.entry([chunk[0], chunk[1], chunk[2]]).or_insert(0) += 1;
    }

    let mut entries: Vec<([u8; 3], u32)> = counts.into_iter().collect();
    entries.sort_unstable_by_key(|&(color, _)| color);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_rgb() {
        // Three red pixels, one blue
        let pixels = [255, 0, 0, 255, 0, 0, 0, 0, 255, 255, 0, 0];
        let histogram = build(&pixels, 3);
        assert_eq!(histogram, vec![([0, 0, 255], 1), ([255, 0, 0], 3)]);
    }

    #[test]
    fn test_ignores_alpha() {
        // Same color under different alphas is one histogram entry
        let pixels = [10, 20, 30, 255, 10, 20, 30, 0];
        let histogram = build(&pixels, 4);
        assert_eq!(histogram, vec![([10, 20, 30], 2)]);
    }

    #[test]
    fn test_sorted_by_channel_key() {
        let pixels = [200, 0, 0, 100, 0, 0, 150, 0, 0];
        let histogram = build(&pixels, 3);
        let keys: Vec<[u8; 3]> = histogram.iter().map(|&(c, _)| c).collect();
        assert_eq!(keys, vec![[100, 0, 0], [150, 0, 0], [200, 0, 0]]);
    }
}
