//! Daily temperature input and the weather-provider boundary.
//!
//! The provider delivers parallel arrays (`time`, `temperature_2m_max`,
//! `temperature_2m_min`) for a contiguous range of days. [`WeatherSeries`]
//! validates that payload once so the degree-day engine only ever sees
//! finite, ascending data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core_types::units::Celsius;
use crate::error::{InputError, InputResult};

/// One day of observed or forecast temperature extremes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTemperature {
    /// Calendar date (no time-of-day)
    pub date: NaiveDate,
    /// Daily maximum (°C)
    pub temp_max: Celsius,
    /// Daily minimum (°C)
    pub temp_min: Celsius,
}

impl DailyTemperature {
    /// Create a daily record
    #[must_use]
    pub fn new(date: NaiveDate, temp_max: Celsius, temp_min: Celsius) -> Self {
        Self {
            date,
            temp_max,
            temp_min,
        }
    }

    /// Daily mean temperature, `(max + min) / 2`
    #[inline]
    #[must_use]
    pub fn avg(&self) -> Celsius {
        Celsius::midpoint(self.temp_max, self.temp_min)
    }
}

/// Raw `daily` block of the provider response. Values may be `null`.
#[derive(Debug, Deserialize)]
struct ProviderDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    daily: ProviderDaily,
}

/// Unvalidated serialized form of [`WeatherSeries`]
#[derive(Debug, Deserialize)]
struct RawSeries {
    days: Vec<DailyTemperature>,
}

/// A validated, strictly ascending daily temperature series
///
/// Deserialization runs the same checks as [`WeatherSeries::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct WeatherSeries {
    days: Vec<DailyTemperature>,
}

impl TryFrom<RawSeries> for WeatherSeries {
    type Error = InputError;

    fn try_from(raw: RawSeries) -> InputResult<Self> {
        Self::new(raw.days)
    }
}

impl WeatherSeries {
    /// Validate already-typed daily records.
    ///
    /// # Errors
    /// Returns [`InputError::NonFiniteValue`] for a non-finite temperature and
    /// [`InputError::OutOfOrder`] when dates are not strictly ascending.
    pub fn new(days: Vec<DailyTemperature>) -> InputResult<Self> {
        for day in &days {
            check_finite("temperature_2m_max", *day.temp_max)?;
            check_finite("temperature_2m_min", *day.temp_min)?;
        }
        check_ascending(&days)?;
        Ok(Self { days })
    }

    /// Build a series from the provider's parallel arrays.
    ///
    /// # Errors
    /// Returns [`InputError::LengthMismatch`] if the arrays differ in length,
    /// [`InputError::InvalidDate`] for an unparsable date,
    /// [`InputError::MissingValue`] for a `null` temperature,
    /// [`InputError::NonFiniteValue`] for NaN/infinite values and
    /// [`InputError::OutOfOrder`] for non-ascending dates.
    pub fn from_daily_arrays<S: AsRef<str>>(
        time: &[S],
        temperature_2m_max: &[Option<f64>],
        temperature_2m_min: &[Option<f64>],
    ) -> InputResult<Self> {
        if time.len() != temperature_2m_max.len() || time.len() != temperature_2m_min.len() {
            return Err(InputError::LengthMismatch {
                dates: time.len(),
                maxima: temperature_2m_max.len(),
                minima: temperature_2m_min.len(),
            });
        }

        let mut days = Vec::with_capacity(time.len());
        for (index, ((date, max), min)) in time
            .iter()
            .zip(temperature_2m_max)
            .zip(temperature_2m_min)
            .enumerate()
        {
            let date = NaiveDate::parse_from_str(date.as_ref().trim(), "%Y-%m-%d")
                .map_err(|_| InputError::InvalidDate {
                    index,
                    value: date.as_ref().to_owned(),
                })?;
            let temp_max = required_temperature("temperature_2m_max", index, *max)?;
            let temp_min = required_temperature("temperature_2m_min", index, *min)?;
            days.push(DailyTemperature::new(date, temp_max, temp_min));
        }

        check_ascending(&days)?;
        trace!(days = days.len(), "parsed weather series");
        Ok(Self { days })
    }

    /// Parse a provider JSON response (`{"daily": {...}}`).
    ///
    /// # Errors
    /// Returns [`InputError::Json`] when the payload does not have the expected
    /// shape, or any error of [`WeatherSeries::from_daily_arrays`].
    pub fn from_provider_json(json: &str) -> InputResult<Self> {
        let response: ProviderResponse = serde_json::from_str(json)?;
        let daily = response.daily;
        Self::from_daily_arrays(
            &daily.time,
            &daily.temperature_2m_max,
            &daily.temperature_2m_min,
        )
    }

    /// Validated days in ascending order
    #[must_use]
    pub fn days(&self) -> &[DailyTemperature] {
        &self.days
    }

    /// Number of days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the series has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Consume the series, returning the days
    #[must_use]
    pub fn into_days(self) -> Vec<DailyTemperature> {
        self.days
    }
}

fn check_finite(field: &'static str, value: f64) -> InputResult<Celsius> {
    Celsius::try_new(value).ok_or(InputError::NonFiniteValue { field, value })
}

fn required_temperature(
    field: &'static str,
    index: usize,
    value: Option<f64>,
) -> InputResult<Celsius> {
    let value = value.ok_or(InputError::MissingValue { field, index })?;
    check_finite(field, value)
}

/// Reject repeated or descending dates; gaps are tolerated but logged.
fn check_ascending(days: &[DailyTemperature]) -> InputResult<()> {
    for (index, pair) in days.windows(2).enumerate() {
        let (previous, current) = (pair[0].date, pair[1].date);
        if current <= previous {
            return Err(InputError::OutOfOrder {
                index: index + 1,
                previous,
                current,
            });
        }
        let gap = (current - previous).num_days();
        if gap > 1 {
            warn!(%previous, %current, gap, "weather series has missing days");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_daily_average() {
        let day = DailyTemperature::new(date("2024-03-01"), Celsius::new(27.0), Celsius::new(15.0));
        assert_eq!(*day.avg(), 21.0);
    }

    #[test]
    fn test_from_daily_arrays() {
        let series = WeatherSeries::from_daily_arrays(
            &["2024-03-01", "2024-03-02"],
            &[Some(28.0), Some(30.5)],
            &[Some(16.0), Some(17.5)],
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.days()[1].date, date("2024-03-02"));
        assert_eq!(*series.days()[1].temp_max, 30.5);
    }

    #[test]
    fn test_empty_arrays_give_empty_series() {
        let series = WeatherSeries::from_daily_arrays::<&str>(&[], &[], &[]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = WeatherSeries::from_daily_arrays(
            &["2024-03-01", "2024-03-02"],
            &[Some(28.0)],
            &[Some(16.0), Some(17.0)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InputError::LengthMismatch {
                dates: 2,
                maxima: 1,
                minima: 2
            }
        ));
    }

    #[test]
    fn test_null_temperature_rejected() {
        let err = WeatherSeries::from_daily_arrays(
            &["2024-03-01", "2024-03-02"],
            &[Some(28.0), Some(29.0)],
            &[Some(16.0), None],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingValue {
                field: "temperature_2m_min",
                index: 1
            }
        ));
    }

    #[test]
    fn test_nan_temperature_rejected() {
        let err = WeatherSeries::from_daily_arrays(
            &["2024-03-01"],
            &[Some(f64::NAN)],
            &[Some(16.0)],
        )
        .unwrap_err();
        assert!(matches!(err, InputError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        let err =
            WeatherSeries::from_daily_arrays(&["01/03/2024"], &[Some(20.0)], &[Some(10.0)])
                .unwrap_err();
        assert!(matches!(err, InputError::InvalidDate { index: 0, .. }));
    }

    #[test]
    fn test_descending_dates_rejected() {
        let err = WeatherSeries::from_daily_arrays(
            &["2024-03-02", "2024-03-01"],
            &[Some(20.0), Some(21.0)],
            &[Some(10.0), Some(11.0)],
        )
        .unwrap_err();
        assert!(matches!(err, InputError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn test_gaps_are_allowed() {
        let series = WeatherSeries::from_daily_arrays(
            &["2024-03-01", "2024-03-05"],
            &[Some(20.0), Some(21.0)],
            &[Some(10.0), Some(11.0)],
        )
        .unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_from_provider_json() {
        let json = r#"{
            "latitude": -1.28,
            "daily": {
                "time": ["2024-03-01", "2024-03-02", "2024-03-03"],
                "temperature_2m_max": [26.1, 27.4, 25.0],
                "temperature_2m_min": [14.2, 15.0, 13.8]
            }
        }"#;
        let series = WeatherSeries::from_provider_json(json).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(*series.days()[2].temp_min, 13.8);
    }

    #[test]
    fn test_provider_json_with_null_rejected() {
        let json = r#"{"daily": {"time": ["2024-03-01"], "temperature_2m_max": [null], "temperature_2m_min": [12.0]}}"#;
        let err = WeatherSeries::from_provider_json(json).unwrap_err();
        assert!(matches!(err, InputError::MissingValue { index: 0, .. }));
    }

    #[test]
    fn test_provider_json_wrong_shape_rejected() {
        let err = WeatherSeries::from_provider_json(r#"{"hourly": {}}"#).unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn test_deserialize_validates_series() {
        let ok = r#"{"days": [
            {"date": "2024-03-01", "temp_max": 25.0, "temp_min": 14.0},
            {"date": "2024-03-02", "temp_max": 26.0, "temp_min": 15.0}
        ]}"#;
        let series: WeatherSeries = serde_json::from_str(ok).unwrap();
        assert_eq!(series.len(), 2);
        let reparsed: WeatherSeries =
            serde_json::from_str(&serde_json::to_string(&series).unwrap()).unwrap();
        assert_eq!(reparsed, series);

        let descending = r#"{"days": [
            {"date": "2024-03-02", "temp_max": 25.0, "temp_min": 14.0},
            {"date": "2024-03-01", "temp_max": 26.0, "temp_min": 15.0}
        ]}"#;
        let err = serde_json::from_str::<WeatherSeries>(descending).unwrap_err();
        assert!(err.to_string().contains("does not follow"));

        let below_absolute_zero = r#"{"days": [
            {"date": "2024-03-01", "temp_max": 25.0, "temp_min": -500.0}
        ]}"#;
        assert!(serde_json::from_str::<WeatherSeries>(below_absolute_zero).is_err());
    }
}
