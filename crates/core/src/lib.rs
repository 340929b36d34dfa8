//! Agronomic Decision Engine Core Library
//!
//! Pure calculation engines behind a farm, forest and weather dashboard:
//!
//! - **Planting advice**: daily min/max temperatures are turned into heating,
//!   cooling and growing degree-days; the running GDD total is compared with a
//!   crop-specific threshold to find a favorable planting window, and a chosen
//!   date is checked against it.
//! - **Tree carbon**: an allometric power law converts trunk diameter, height
//!   and wood density into above-ground biomass and CO2-equivalent.
//!
//! Every engine function is synchronous, allocation-light and free of shared
//! state. Raw provider payloads and form strings are validated once at the
//! boundary ([`WeatherSeries`], [`TreeMeasurement::parse`]); past that point
//! nothing fails.
//!
//! ```
//! use agro_engine_core::{advise_planting, CropThresholdTable, WeatherSeries};
//!
//! let series = WeatherSeries::from_daily_arrays(
//!     &["2024-03-01", "2024-03-02"],
//!     &[Some(31.0), Some(33.0)],
//!     &[Some(19.0), Some(21.0)],
//! )
//! .unwrap();
//! let candidate = series.days()[1].date;
//!
//! let advice = advise_planting(series.days(), "maize", &CropThresholdTable::default(), candidate);
//! assert_eq!(advice.records.len(), 2);
//! assert!(advice.window.is_none()); // 15 + 17 GDD is far below 200
//! ```

// Units, input records and boundary validation
pub mod core_types;
pub mod error;

// Engines
pub mod agronomy;
pub mod forestry;

// Re-export core types
pub use core_types::{
    Celsius, Centimeters, DailyTemperature, DegreeDays, GramsPerCubicCentimeter, Kilograms,
    Meters, Tonnes, TreeMeasurement, WeatherSeries,
};
pub use error::{InputError, InputResult};

// Re-export engines
pub use agronomy::{
    accumulate_degree_days, advise_planting, is_favorable, summarize, CropThresholdTable,
    DegreeDayBases, DegreeDayRecord, DegreeDaySummary, PlantingAdvice, PlantingWindow,
    PlantingWindowResolver,
};
pub use forestry::{
    estimate_biomass, estimate_biomass_batch, AllometricCoefficients, BiomassEstimate,
};
