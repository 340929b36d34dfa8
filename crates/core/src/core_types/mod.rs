//! Core types and input boundary

pub mod tree;
pub mod units;
pub mod weather;

pub use tree::TreeMeasurement;
pub use units::*;
pub use weather::{DailyTemperature, WeatherSeries};
