//! Crop heat-unit thresholds
//!
//! Maps a crop name to the cumulative GDD it needs before conditions count as
//! favorable for planting. Names are normalized to Title Case words so that
//! registry spellings like "coffee ROBUSTA" or "  maize " still match.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core_types::units::DegreeDays;

/// Normalize a crop name: lower-case, split on whitespace, capitalize each
/// word, rejoin with single spaces.
///
/// # Example
/// ```
/// use agro_engine_core::agronomy::thresholds::normalize_crop_name;
///
/// assert_eq!(normalize_crop_name("coffee ROBUSTA"), "Coffee Robusta");
/// assert_eq!(normalize_crop_name("  maize "), "Maize");
/// ```
pub fn normalize_crop_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable lookup table from normalized crop name to required cumulative GDD
///
/// Handed to the resolver as configuration; alternate tables can be built
/// with [`CropThresholdTable::new`] or deserialized from a JSON object of
/// `{ "crop name": gdd }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, DegreeDays>",
    into = "BTreeMap<String, DegreeDays>"
)]
pub struct CropThresholdTable {
    thresholds: FxHashMap<String, DegreeDays>,
}

impl CropThresholdTable {
    /// Build a table, normalizing every crop name.
    ///
    /// Later entries win when two names normalize to the same key.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, DegreeDays)>,
        S: AsRef<str>,
    {
        let thresholds = entries
            .into_iter()
            .map(|(name, gdd)| (normalize_crop_name(name.as_ref()), gdd))
            .collect();
        Self { thresholds }
    }

    /// Required cumulative GDD for a crop, if the crop is known
    pub fn threshold_for(&self, crop_name: &str) -> Option<DegreeDays> {
        self.thresholds.get(&normalize_crop_name(crop_name)).copied()
    }

    /// Number of crops in the table
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Whether the table has no crops
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Iterate over `(normalized name, threshold)` pairs in arbitrary order
    pub fn entries(&self) -> impl Iterator<Item = (&str, DegreeDays)> {
        self.thresholds
            .iter()
            .map(|(name, gdd)| (name.as_str(), *gdd))
    }
}

impl Default for CropThresholdTable {
    fn default() -> Self {
        Self::new([
            ("Maize", DegreeDays::new(200.0)),
            ("Coffee Robusta", DegreeDays::new(300.0)),
        ])
    }
}

impl From<BTreeMap<String, DegreeDays>> for CropThresholdTable {
    fn from(map: BTreeMap<String, DegreeDays>) -> Self {
        Self::new(map)
    }
}

impl From<CropThresholdTable> for BTreeMap<String, DegreeDays> {
    fn from(table: CropThresholdTable) -> Self {
        table.thresholds.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_crop_name() {
        assert_eq!(normalize_crop_name("maize"), "Maize");
        assert_eq!(normalize_crop_name("MAIZE"), "Maize");
        assert_eq!(normalize_crop_name("coffee robusta"), "Coffee Robusta");
        assert_eq!(normalize_crop_name("Coffee   ROBUSTA\t"), "Coffee Robusta");
        assert_eq!(normalize_crop_name(""), "");
    }

    #[test]
    fn test_default_table() {
        let table = CropThresholdTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.threshold_for("Maize"), Some(DegreeDays::new(200.0)));
        assert_eq!(
            table.threshold_for("Coffee Robusta"),
            Some(DegreeDays::new(300.0))
        );
    }

    #[test]
    fn test_lookup_is_case_and_spacing_insensitive() {
        let table = CropThresholdTable::default();
        assert_eq!(
            table.threshold_for("coffee ROBUSTA"),
            table.threshold_for("Coffee Robusta")
        );
        assert_eq!(table.threshold_for(" maize"), Some(DegreeDays::new(200.0)));
    }

    #[test]
    fn test_unknown_crop_is_none() {
        let table = CropThresholdTable::default();
        assert_eq!(table.threshold_for("Cassava"), None);
        assert_eq!(table.threshold_for(""), None);
    }

    #[test]
    fn test_lookup_does_not_mutate_table() {
        let table = CropThresholdTable::default();
        let before = table.clone();
        let _ = table.threshold_for("Sorghum");
        let _ = table.threshold_for("maize");
        assert_eq!(table, before);
    }

    #[test]
    fn test_custom_table_from_json() {
        let table: CropThresholdTable =
            serde_json::from_str(r#"{"sweet potato": 450.0, "BEANS": 120}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.threshold_for("Sweet Potato"), Some(DegreeDays::new(450.0)));
        assert_eq!(table.threshold_for("beans"), Some(DegreeDays::new(120.0)));
        assert_eq!(table.threshold_for("Maize"), None);
    }

    #[test]
    fn test_serializes_normalized_names() {
        let table = CropThresholdTable::new([("sweet potato", DegreeDays::new(450.0))]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Sweet Potato":450.0}"#);
    }
}
