//! FFI entry points for degree-days and planting windows.
//!
//! Dates cross the boundary as days since 1970-01-01 (`i32`), temperatures
//! as `f64` °C.

use agro_engine_core::agronomy::resolve_with_threshold;
use agro_engine_core::{
    accumulate_degree_days, Celsius, CropThresholdTable, DailyTemperature, DegreeDayRecord,
    DegreeDays, PlantingWindow, PlantingWindowResolver, WeatherSeries,
};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::slice;

use crate::error::{AgroErrorCode, DefaultAgroError};
use crate::helpers::{date_from_unix_days, handle_ffi_result, unix_days_from_date};

/// One day of temperature input.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgroDailyTemperature {
    /// Days since 1970-01-01.
    pub day: i32,
    /// Daily maximum (°C).
    pub temp_max: f64,
    /// Daily minimum (°C).
    pub temp_min: f64,
}

/// One day of degree-day output.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgroDegreeDayRecord {
    /// Days since 1970-01-01.
    pub day: i32,
    /// Heating degree-days.
    pub hdd: f64,
    /// Cooling degree-days.
    pub cdd: f64,
    /// Growing degree-days.
    pub gdd: f64,
    /// Running GDD total.
    pub cumulative_gdd: f64,
}

impl From<&DegreeDayRecord> for AgroDegreeDayRecord {
    fn from(record: &DegreeDayRecord) -> Self {
        Self {
            day: unix_days_from_date(record.date),
            hdd: *record.hdd,
            cdd: *record.cdd,
            gdd: *record.gdd,
            cumulative_gdd: *record.cumulative_gdd,
        }
    }
}

/// Planting window result. `has_window == false` means no recommendation;
/// the day fields are then zero and must be ignored.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgroPlantingWindow {
    /// Whether a window was found.
    pub has_window: bool,
    /// First favorable day (days since 1970-01-01).
    pub start_day: i32,
    /// Last favorable day (days since 1970-01-01).
    pub end_day: i32,
}

impl From<Option<PlantingWindow>> for AgroPlantingWindow {
    fn from(window: Option<PlantingWindow>) -> Self {
        window.map_or_else(Self::default, |w| Self {
            has_window: true,
            start_day: unix_days_from_date(w.start_date),
            end_day: unix_days_from_date(w.end_date),
        })
    }
}

/// Copy and validate the caller's temperature array.
///
/// # Safety
/// `days` must point to `len` readable `AgroDailyTemperature` values, or be
/// null when `len == 0`.
unsafe fn read_series(
    days: *const AgroDailyTemperature,
    len: usize,
) -> Result<WeatherSeries, DefaultAgroError> {
    if len == 0 {
        return Ok(WeatherSeries::default());
    }
    if days.is_null() {
        return Err(DefaultAgroError::null_pointer("days"));
    }
    // SAFETY: non-null and the caller guarantees `len` readable elements.
    let raw = unsafe { slice::from_raw_parts(days, len) };

    let mut parsed = Vec::with_capacity(len);
    for (index, day) in raw.iter().enumerate() {
        let date = date_from_unix_days(day.day).ok_or_else(|| {
            DefaultAgroError::invalid_parameter(
                "days",
                &format!("day number {} at index {index} is out of range", day.day),
            )
        })?;
        let (Some(temp_max), Some(temp_min)) =
            (Celsius::try_new(day.temp_max), Celsius::try_new(day.temp_min))
        else {
            return Err(DefaultAgroError::invalid_parameter(
                "days",
                &format!("temperature at index {index} is not a finite, physical value"),
            ));
        };
        parsed.push(DailyTemperature::new(date, temp_max, temp_min));
    }

    WeatherSeries::new(parsed).map_err(|e| DefaultAgroError::invalid_input(&e))
}

/// Compute per-day degree-days and the cumulative GDD curve.
///
/// # Parameters
/// - `days`: Input days in ascending date order
/// - `len`: Number of input days
/// - `out_records`: Caller-allocated buffer with room for `len` records
///
/// # Returns
/// - `Ok` with `out_records[0..len]` filled (nothing written when `len == 0`)
/// - `NullPointer` if `days` or `out_records` is null while `len > 0`
/// - `InvalidParameter` / `InvalidInput` if the series fails validation
///
/// # Safety
/// `days` must point to `len` readable values and `out_records` to `len`
/// writable values (either may be null when `len == 0`).
#[no_mangle]
pub unsafe extern "C" fn agro_degree_days(
    days: *const AgroDailyTemperature,
    len: usize,
    out_records: *mut AgroDegreeDayRecord,
) -> AgroErrorCode {
    // SAFETY: forwarded caller guarantees.
    handle_ffi_result(unsafe { degree_days_impl(days, len, out_records) })
}

unsafe fn degree_days_impl(
    days: *const AgroDailyTemperature,
    len: usize,
    out_records: *mut AgroDegreeDayRecord,
) -> Result<(), DefaultAgroError> {
    if len > 0 && out_records.is_null() {
        return Err(DefaultAgroError::null_pointer("out_records"));
    }
    // SAFETY: forwarded caller guarantee on `days`.
    let series = unsafe { read_series(days, len)? };
    if series.is_empty() {
        return Ok(());
    }
    let records = accumulate_degree_days(series.days());
    // SAFETY: non-null and the caller guarantees room for `len` records.
    let out = unsafe { slice::from_raw_parts_mut(out_records, len) };
    for (slot, record) in out.iter_mut().zip(&records) {
        *slot = AgroDegreeDayRecord::from(record);
    }
    Ok(())
}

/// Resolve the favorable planting window for a crop using the built-in
/// threshold table (Maize 200, Coffee Robusta 300 GDD).
///
/// An unknown crop or a threshold that is never reached is not an error:
/// the call returns `Ok` with `has_window == false`.
///
/// # Returns
/// - `Ok` with `*out_window` written
/// - `NullPointer` if `crop_name` or `out_window` is null, or `days` is null while `len > 0`
/// - `InvalidParameter` if `crop_name` is not UTF-8 or a day is out of range
/// - `InvalidInput` if the series fails validation
///
/// # Safety
/// `days` must point to `len` readable values, `crop_name` must be a
/// null-terminated string, `out_window` must be writable.
#[no_mangle]
pub unsafe extern "C" fn agro_planting_window(
    days: *const AgroDailyTemperature,
    len: usize,
    crop_name: *const c_char,
    out_window: *mut AgroPlantingWindow,
) -> AgroErrorCode {
    // SAFETY: forwarded caller guarantees.
    handle_ffi_result(unsafe { planting_window_impl(days, len, crop_name, out_window) })
}

unsafe fn planting_window_impl(
    days: *const AgroDailyTemperature,
    len: usize,
    crop_name: *const c_char,
    out_window: *mut AgroPlantingWindow,
) -> Result<(), DefaultAgroError> {
    if out_window.is_null() {
        return Err(DefaultAgroError::null_pointer("out_window"));
    }
    if crop_name.is_null() {
        return Err(DefaultAgroError::null_pointer("crop_name"));
    }
    // SAFETY: non-null and the caller guarantees null termination.
    let crop = unsafe { CStr::from_ptr(crop_name) }
        .to_str()
        .map_err(|_| DefaultAgroError::invalid_parameter("crop_name", "not valid UTF-8"))?;
    // SAFETY: forwarded caller guarantee on `days`.
    let series = unsafe { read_series(days, len)? };

    let table = CropThresholdTable::default();
    let records = accumulate_degree_days(series.days());
    let window = PlantingWindowResolver::new(&table).resolve(crop, &records);
    // SAFETY: checked non-null above.
    unsafe { *out_window = AgroPlantingWindow::from(window) };
    Ok(())
}

/// Resolve the planting window against an explicit GDD threshold, for hosts
/// that keep their own crop table.
///
/// # Returns
/// - `Ok` with `*out_window` written
/// - `NullPointer` if `out_window` is null, or `days` is null while `len > 0`
/// - `InvalidParameter` if `threshold` is not finite or a day is out of range
/// - `InvalidInput` if the series fails validation
///
/// # Safety
/// `days` must point to `len` readable values and `out_window` must be writable.
#[no_mangle]
pub unsafe extern "C" fn agro_planting_window_with_threshold(
    days: *const AgroDailyTemperature,
    len: usize,
    threshold: f64,
    out_window: *mut AgroPlantingWindow,
) -> AgroErrorCode {
    // SAFETY: forwarded caller guarantees.
    handle_ffi_result(unsafe { threshold_window_impl(days, len, threshold, out_window) })
}

unsafe fn threshold_window_impl(
    days: *const AgroDailyTemperature,
    len: usize,
    threshold: f64,
    out_window: *mut AgroPlantingWindow,
) -> Result<(), DefaultAgroError> {
    if out_window.is_null() {
        return Err(DefaultAgroError::null_pointer("out_window"));
    }
    if !threshold.is_finite() {
        return Err(DefaultAgroError::invalid_parameter(
            "threshold",
            &format!("must be finite, got {threshold}"),
        ));
    }
    // SAFETY: forwarded caller guarantee on `days`.
    let series = unsafe { read_series(days, len)? };

    let records = accumulate_degree_days(series.days());
    let window = resolve_with_threshold(DegreeDays::new(threshold), &records);
    // SAFETY: checked non-null above.
    unsafe { *out_window = AgroPlantingWindow::from(window) };
    Ok(())
}

/// Whether `candidate_day` (days since 1970-01-01) lies inside the window.
///
/// Returns `false` for a null pointer or a window with `has_window == false`.
///
/// # Safety
/// `window` must be null or point to a readable `AgroPlantingWindow`.
#[no_mangle]
pub unsafe extern "C" fn agro_is_favorable(
    window: *const AgroPlantingWindow,
    candidate_day: i32,
) -> bool {
    // SAFETY: caller guarantees `window` is null or valid.
    let Some(window) = (unsafe { window.as_ref() }) else {
        return false;
    };
    window.has_window && window.start_day <= candidate_day && candidate_day <= window.end_day
}
