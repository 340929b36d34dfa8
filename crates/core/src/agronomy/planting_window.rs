//! Favorable planting window from a cumulative GDD curve
//!
//! The window opens on the first day the running GDD total reaches the crop's
//! threshold. It closes on the last day, at or after the opening, whose
//! cumulative value is still at or above the threshold. Because the curve
//! never decreases, that is the last day of the supplied series: the window is
//! open-ended up to the data horizon.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agronomy::degree_days::DegreeDayRecord;
use crate::agronomy::thresholds::CropThresholdTable;
use crate::core_types::units::DegreeDays;

/// Inclusive date range in which planting is considered favorable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingWindow {
    /// First day the cumulative GDD meets the threshold
    pub start_date: NaiveDate,
    /// Last day of the series still at or above the threshold
    pub end_date: NaiveDate,
}

impl PlantingWindow {
    /// Whether `date` lies within `[start_date, end_date]`
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered, both ends included
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Resolve a planting window against an explicit threshold
///
/// # Arguments
/// * `threshold` - Required cumulative GDD
/// * `records` - Degree-day records in ascending date order
///
/// # Returns
/// `None` when no record reaches the threshold (including an empty series)
pub fn resolve_with_threshold(
    threshold: DegreeDays,
    records: &[DegreeDayRecord],
) -> Option<PlantingWindow> {
    let first = records
        .iter()
        .position(|r| r.cumulative_gdd >= threshold)?;

    let start_date = records[first].date;
    let end_date = records[first..]
        .iter()
        .rev()
        .find(|r| r.cumulative_gdd >= threshold)
        .map_or(start_date, |r| r.date);

    Some(PlantingWindow {
        start_date,
        end_date,
    })
}

/// Looks up crop thresholds and resolves planting windows
#[derive(Debug, Clone, Copy)]
pub struct PlantingWindowResolver<'a> {
    table: &'a CropThresholdTable,
}

impl<'a> PlantingWindowResolver<'a> {
    /// Create a resolver over a threshold table
    pub fn new(table: &'a CropThresholdTable) -> Self {
        Self { table }
    }

    /// Threshold table in use
    pub fn table(&self) -> &'a CropThresholdTable {
        self.table
    }

    /// Resolve the planting window for a crop
    ///
    /// An unknown crop and a threshold that is never reached both give `None`;
    /// neither is an error.
    pub fn resolve(
        &self,
        crop_name: &str,
        records: &[DegreeDayRecord],
    ) -> Option<PlantingWindow> {
        let Some(threshold) = self.table.threshold_for(crop_name) else {
            debug!(crop = crop_name, "no GDD threshold for crop");
            return None;
        };

        let window = resolve_with_threshold(threshold, records);
        if window.is_none() {
            debug!(
                crop = crop_name,
                threshold = *threshold,
                days = records.len(),
                "GDD threshold not reached within series"
            );
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agronomy::degree_days::accumulate_degree_days;
    use crate::core_types::units::Celsius;
    use crate::core_types::weather::DailyTemperature;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    /// Constant days with a daily GDD of `gdd`
    fn records(gdd: f64, days: u64) -> Vec<DegreeDayRecord> {
        let series: Vec<_> = (0..days)
            .map(|i| {
                DailyTemperature::new(
                    start() + chrono::Days::new(i),
                    Celsius::new(10.0 + gdd + 3.0),
                    Celsius::new(10.0 + gdd - 3.0),
                )
            })
            .collect();
        accumulate_degree_days(&series)
    }

    #[test]
    fn test_window_opens_at_first_crossing_and_runs_to_horizon() {
        // 25 GDD per day: 200 reached on day index 7
        let recs = records(25.0, 20);
        let window = resolve_with_threshold(DegreeDays::new(200.0), &recs).unwrap();

        assert_eq!(window.start_date, recs[7].date);
        assert_eq!(window.end_date, recs[19].date);
        assert_eq!(window.len_days(), 13);
    }

    #[test]
    fn test_crossing_on_last_day() {
        let recs = records(10.0, 20); // 200 reached exactly on index 19
        let window = resolve_with_threshold(DegreeDays::new(200.0), &recs).unwrap();
        assert_eq!(window.start_date, recs[19].date);
        assert_eq!(window.end_date, recs[19].date);
    }

    #[test]
    fn test_threshold_never_reached() {
        let recs = records(5.0, 20);
        assert!(resolve_with_threshold(DegreeDays::new(200.0), &recs).is_none());
    }

    #[test]
    fn test_empty_series() {
        assert!(resolve_with_threshold(DegreeDays::new(1.0), &[]).is_none());
    }

    #[test]
    fn test_zero_threshold_opens_on_first_day() {
        let recs = records(0.0, 5);
        let window = resolve_with_threshold(DegreeDays::ZERO, &recs).unwrap();
        assert_eq!(window.start_date, recs[0].date);
        assert_eq!(window.end_date, recs[4].date);
    }

    #[test]
    fn test_resolver_uses_table() {
        let table = CropThresholdTable::default();
        let resolver = PlantingWindowResolver::new(&table);
        let recs = records(25.0, 20);

        let maize = resolver.resolve("maize", &recs).unwrap();
        assert_eq!(maize.start_date, recs[7].date); // 200

        let coffee = resolver.resolve("COFFEE robusta", &recs).unwrap();
        assert_eq!(coffee.start_date, recs[11].date); // 300
        assert_eq!(coffee.end_date, recs[19].date);
    }

    #[test]
    fn test_unknown_crop_has_no_window() {
        let table = CropThresholdTable::default();
        let resolver = PlantingWindowResolver::new(&table);
        assert!(resolver.resolve("Teff", &records(25.0, 20)).is_none());
    }

    #[test]
    fn test_alternate_table() {
        let table = CropThresholdTable::new([("Maize", DegreeDays::new(50.0))]);
        let resolver = PlantingWindowResolver::new(&table);
        let recs = records(25.0, 20);
        assert_eq!(resolver.resolve("Maize", &recs).unwrap().start_date, recs[1].date);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = PlantingWindow {
            start_date: start(),
            end_date: start() + chrono::Days::new(3),
        };
        assert!(window.contains(start()));
        assert!(window.contains(start() + chrono::Days::new(3)));
        assert!(!window.contains(start() - chrono::Days::new(1)));
        assert!(!window.contains(start() + chrono::Days::new(4)));
    }
}
