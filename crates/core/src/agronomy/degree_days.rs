//! Degree-day accumulation
//!
//! Turns a daily min/max temperature series into heating, cooling and growing
//! degree-days using the simple averaging method:
//!
//! - avg = (T_max + T_min) / 2
//! - HDD = max(0, T_comfort − avg)
//! - CDD = max(0, avg − T_comfort)
//! - GDD = max(0, avg − T_base)
//!
//! with T_comfort = 18°C and T_base = 10°C by default. The running GDD total is
//! what crop thresholds are compared against.
//!
//! # References
//! - Baskerville, G.L. & Emin, P. (1969). "Rapid estimation of heat accumulation
//!   from maximum and minimum temperatures". Ecology, 50(3), 514-517

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core_types::units::{Celsius, DegreeDays};
use crate::core_types::weather::DailyTemperature;

/// Base temperatures for the degree-day calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegreeDayBases {
    /// Balance point for heating/cooling degree-days (°C)
    pub comfort_base: Celsius,
    /// Minimum temperature for crop development (°C)
    pub growth_base: Celsius,
}

impl Default for DegreeDayBases {
    fn default() -> Self {
        Self {
            comfort_base: Celsius::COMFORT_BASE,
            growth_base: Celsius::GROWTH_BASE,
        }
    }
}

/// Degree-day values for a single day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeDayRecord {
    /// Calendar date of the input day
    pub date: NaiveDate,
    /// Heating degree-days
    pub hdd: DegreeDays,
    /// Cooling degree-days
    pub cdd: DegreeDays,
    /// Growing degree-days
    pub gdd: DegreeDays,
    /// Running GDD total from the first day up to and including this one
    pub cumulative_gdd: DegreeDays,
}

/// Totals over a run of degree-day records
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DegreeDaySummary {
    /// Number of days summarized
    pub days: usize,
    /// Sum of heating degree-days
    pub total_hdd: DegreeDays,
    /// Sum of cooling degree-days
    pub total_cdd: DegreeDays,
    /// Sum of growing degree-days (equals the last cumulative value)
    pub total_gdd: DegreeDays,
}

impl DegreeDayBases {
    /// Degree-day values for one day, without the running total
    ///
    /// # Returns
    /// `(hdd, cdd, gdd)`, each clamped at zero
    #[inline]
    pub fn daily(&self, day: &DailyTemperature) -> (DegreeDays, DegreeDays, DegreeDays) {
        let avg = day.avg();
        let hdd = DegreeDays::excess_over(self.comfort_base, avg);
        let cdd = DegreeDays::excess_over(avg, self.comfort_base);
        let gdd = DegreeDays::excess_over(avg, self.growth_base);
        (hdd, cdd, gdd)
    }

    /// Accumulate degree-days over an ascending daily series
    ///
    /// Produces one record per input day, in input order. The cumulative GDD of
    /// the first record equals its GDD; each later record adds its own GDD to
    /// the previous total, so the curve never decreases.
    ///
    /// # Arguments
    /// * `days` - Daily temperatures in ascending date order
    ///
    /// # Returns
    /// Per-day records (empty when `days` is empty)
    pub fn accumulate(&self, days: &[DailyTemperature]) -> Vec<DegreeDayRecord> {
        trace!(days = days.len(), "accumulating degree-days");

        let mut cumulative_gdd = DegreeDays::ZERO;
        days.iter()
            .map(|day| {
                let (hdd, cdd, gdd) = self.daily(day);
                cumulative_gdd += gdd;
                DegreeDayRecord {
                    date: day.date,
                    hdd,
                    cdd,
                    gdd,
                    cumulative_gdd,
                }
            })
            .collect()
    }
}

/// Accumulate degree-days with the default 18°C / 10°C bases
pub fn accumulate_degree_days(days: &[DailyTemperature]) -> Vec<DegreeDayRecord> {
    DegreeDayBases::default().accumulate(days)
}

/// Sum heating, cooling and growing degree-days over a run of records
pub fn summarize(records: &[DegreeDayRecord]) -> DegreeDaySummary {
    DegreeDaySummary {
        days: records.len(),
        total_hdd: records.iter().map(|r| r.hdd).sum(),
        total_cdd: records.iter().map(|r| r.cdd).sum(),
        total_gdd: records.iter().map(|r| r.gdd).sum(),
    }
}
