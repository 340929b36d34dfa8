//! Degree-day driven planting advice
//!
//! Pipeline: daily temperatures → degree-day records → planting window →
//! favorability of a chosen date. Every stage is a pure function of its
//! inputs; callers re-run the pipeline whenever the farm, crop or date changes.

pub mod degree_days;
pub mod favorability;
pub mod planting_window;
pub mod thresholds;

pub use degree_days::{
    accumulate_degree_days, summarize, DegreeDayBases, DegreeDayRecord, DegreeDaySummary,
};
pub use favorability::is_favorable;
pub use planting_window::{resolve_with_threshold, PlantingWindow, PlantingWindowResolver};
pub use thresholds::{normalize_crop_name, CropThresholdTable};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core_types::weather::DailyTemperature;

/// Result of one pass through the planting pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingAdvice {
    /// Per-day degree-days, for charting
    pub records: Vec<DegreeDayRecord>,
    /// Favorable window, if the crop is known and its threshold was reached
    pub window: Option<PlantingWindow>,
    /// Whether the candidate date lies inside `window`
    pub is_favorable: bool,
}

/// Run the whole planting pipeline with the default degree-day bases
///
/// # Arguments
/// * `days` - Daily temperatures in ascending date order
/// * `crop_name` - Crop name as entered in the registry (any case/spacing)
/// * `table` - Threshold table to resolve the crop against
/// * `candidate` - Planting date chosen by the user
pub fn advise_planting(
    days: &[DailyTemperature],
    crop_name: &str,
    table: &CropThresholdTable,
    candidate: NaiveDate,
) -> PlantingAdvice {
    let records = accumulate_degree_days(days);
    let window = PlantingWindowResolver::new(table).resolve(crop_name, &records);
    PlantingAdvice {
        is_favorable: is_favorable(candidate, window.as_ref()),
        records,
        window,
    }
}
