//! Reference color-name dataset.
//!
//! A [`NameDataset`] is an ordered, immutable list of `(name, color)` pairs.
//! The builtin table ships as JSON embedded in the binary and is parsed once;
//! the ordering of the file is the canonical ordering used for deterministic
//! nearest-neighbor tie-breaks, so it must never be re-sorted.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::DatasetError;

/// The embedded builtin reference table.
const BUILTIN_JSON: &str = include_str!("../../assets/color_names.json");

/// One reference entry: a human-readable name and its exact color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

/// Raw JSON shape of a dataset entry.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    hex: String,
}

/// An ordered, immutable reference table of named colors.
///
/// Construct with [`NameDataset::builtin`] for the embedded table, or
/// [`NameDataset::new`] to inject a custom table (tests use small fixtures).
/// The dataset is read-only after construction and safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct NameDataset {
    entries: Vec<NamedColor>,
}

impl NameDataset {
    /// Build a dataset from explicit entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Unavailable`] if `entries` is empty: a namer
    /// with nothing to match against cannot satisfy any lookup.
    pub fn new(entries: Vec<NamedColor>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Unavailable {
                reason: "dataset contains no entries".into(),
            });
        }
        Ok(Self { entries })
    }

    /// Load the builtin reference table embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Unavailable`] if the embedded JSON fails to
    /// parse, contains an invalid hex color, or is empty. This surfaces
    /// loudly instead of degrading lookups to empty strings.
    pub fn builtin() -> Result<Self, DatasetError> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(BUILTIN_JSON).map_err(|e| DatasetError::Unavailable {
                reason: format!("builtin table is not valid JSON: {e}"),
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for entry in raw {
            let color: Color = entry.hex.parse().map_err(|e| DatasetError::Unavailable {
                reason: format!("builtin entry {:?} has invalid hex {:?}: {e}", entry.name, entry.hex),
            })?;
            entries.push(NamedColor {
                name: entry.name,
                color,
            });
        }

        tracing::debug!(entries = entries.len(), "builtin color name dataset loaded");
        Self::new(entries)
    }

    /// The entries in canonical order.
    #[inline]
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: empty datasets are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let dataset = NameDataset::builtin().expect("builtin dataset must parse");
        assert!(
            dataset.len() > 100,
            "builtin table unexpectedly small: {}",
            dataset.len()
        );
    }

    #[test]
    fn test_builtin_contains_blaze_orange() {
        let dataset = NameDataset::builtin().unwrap();
        let entry = dataset
            .entries()
            .iter()
            .find(|e| e.name == "Blaze Orange")
            .expect("Blaze Orange missing from builtin table");
        assert_eq!(entry.color, Color::new(255, 102, 0));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = NameDataset::new(Vec::new());
        assert!(matches!(result, Err(DatasetError::Unavailable { .. })));
    }

    #[test]
    fn test_custom_dataset_preserves_order() {
        let entries = vec![
            NamedColor {
                name: "First".into(),
                color: Color::new(1, 2, 3),
            },
            NamedColor {
                name: "Second".into(),
                color: Color::new(4, 5, 6),
            },
        ];
        let dataset = NameDataset::new(entries).unwrap();
        assert_eq!(dataset.entries()[0].name, "First");
        assert_eq!(dataset.entries()[1].name, "Second");
    }
}
