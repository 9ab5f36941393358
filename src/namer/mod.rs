//! Nearest-name lookup over a reference color table.
//!
//! [`ColorNamer`] maps any color to the closest human-readable name from a
//! [`NameDataset`]. Exact matches win outright via a hash table; everything
//! else falls through to a nearest-neighbor scan in RGB space, with ties
//! broken by first occurrence in the dataset's canonical order.

pub mod dataset;

use std::collections::HashMap;

use crate::color::Color;
use crate::error::DatasetError;

pub use dataset::{NameDataset, NamedColor};

/// Squared Euclidean distance between two colors in RGB space.
///
/// Squared distance keeps the scan in integer arithmetic; ordering is the
/// same as for the real distance.
#[inline]
fn distance_squared(a: Color, b: Color) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Maps colors to the closest named reference entry.
///
/// The dataset is an explicit constructor argument, never a hidden global,
/// so tests can substitute a small fixture table. Construction precomputes
/// an exact-match index; lookups after that are infallible.
///
/// # Example
/// ```
/// use huekit::{Color, ColorNamer};
///
/// let namer = ColorNamer::with_builtin().unwrap();
/// let orange: Color = "#FF6600".parse().unwrap();
/// assert_eq!(namer.name(orange), "Blaze Orange");
/// ```
#[derive(Debug, Clone)]
pub struct ColorNamer {
    dataset: NameDataset,
    /// Exact-match index: channel bytes -> index of the first entry with
    /// that color. Byte keys are equivalent to the normalized lowercase hex
    /// the wire format uses, without the allocation.
    exact: HashMap<[u8; 3], usize>,
}

impl ColorNamer {
    /// Build a namer over the given dataset.
    pub fn new(dataset: NameDataset) -> Self {
        let mut exact = HashMap::with_capacity(dataset.len());
        for (i, entry) in dataset.entries().iter().enumerate() {
            // First occurrence wins so duplicate hexes keep canonical order
            exact.entry(entry.color.to_bytes()).or_insert(i);
        }
        Self { dataset, exact }
    }

    /// Build a namer over the builtin reference table.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Unavailable`] when the builtin table cannot
    /// be loaded; the namer is unusable in that case rather than silently
    /// returning empty names.
    pub fn with_builtin() -> Result<Self, DatasetError> {
        Ok(Self::new(NameDataset::builtin()?))
    }

    /// The dataset this namer matches against.
    #[inline]
    pub fn dataset(&self) -> &NameDataset {
        &self.dataset
    }

    /// The name of the closest reference entry.
    ///
    /// Exact color matches return their entry's name directly, even when
    /// another entry is equidistant. Otherwise the nearest entry by squared
    /// Euclidean RGB distance wins; among equidistant entries the first in
    /// dataset order wins (the strict `<` in the scan guarantees this).
    pub fn name(&self, color: Color) -> &str {
        &self.nearest(color).name
    }

    /// The closest reference entry itself.
    pub fn nearest(&self, color: Color) -> &NamedColor {
        if let Some(&i) = self.exact.get(&color.to_bytes()) {
            return &self.dataset.entries()[i];
        }

        let mut best_index = 0;
        let mut best_dist = u32::MAX;
        for (i, entry) in self.dataset.entries().iter().enumerate() {
            let dist = distance_squared(color, entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }
        &self.dataset.entries()[best_index]
    }
}
