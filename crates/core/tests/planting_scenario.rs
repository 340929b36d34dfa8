//! End-to-end planting pipeline: provider payload → degree-days → window → favorability
use agro_engine_core::agronomy::thresholds::normalize_crop_name;
use agro_engine_core::{
    accumulate_degree_days, advise_planting, is_favorable, CropThresholdTable, DegreeDays,
    PlantingWindowResolver, WeatherSeries,
};
use chrono::{Days, NaiveDate};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

/// 60 days shaped so cumulative GDD first reaches 200 on index 17:
/// days 0-9 average 18°C (8 GDD), days 10-29 average 25°C (15 GDD),
/// then alternating cold (0 GDD) and mild (5 GDD) days.
fn sixty_day_payload() -> String {
    let mut time = Vec::new();
    let mut maxima = Vec::new();
    let mut minima = Vec::new();
    for i in 0..60u64 {
        let (max, min) = match i {
            0..=9 => (24.0, 12.0),
            10..=29 => (32.0, 18.0),
            _ if i % 2 == 0 => (11.0, 1.0),
            _ => (19.0, 11.0),
        };
        time.push(format!("\"{}\"", first_day() + Days::new(i)));
        maxima.push(format!("{max:.1}"));
        minima.push(format!("{min:.1}"));
    }
    format!(
        r#"{{"latitude": 0.35, "longitude": 32.58, "daily": {{"time": [{}], "temperature_2m_max": [{}], "temperature_2m_min": [{}]}}}}"#,
        time.join(","),
        maxima.join(","),
        minima.join(",")
    )
}

#[test]
fn test_maize_window_from_sixty_day_series() {
    let series = WeatherSeries::from_provider_json(&sixty_day_payload()).unwrap();
    assert_eq!(series.len(), 60);
    let dates: Vec<_> = series.days().iter().map(|d| d.date).collect();

    let table = CropThresholdTable::default();
    let records = accumulate_degree_days(series.days());
    assert_eq!(records[16].cumulative_gdd, 185.0);
    assert_eq!(records[17].cumulative_gdd, 200.0);

    let window = PlantingWindowResolver::new(&table)
        .resolve("Maize", &records)
        .expect("maize threshold is reached");
    assert_eq!(window.start_date, dates[17]);
    assert_eq!(window.end_date, dates[59]);

    let day_after_horizon = dates[59] + Days::new(1);
    assert!(!is_favorable(dates[0], Some(&window)));
    assert!(is_favorable(dates[17], Some(&window)));
    assert!(is_favorable(dates[59], Some(&window)));
    assert!(!is_favorable(day_after_horizon, Some(&window)));
}

#[test]
fn test_advise_planting_matches_stepwise_pipeline() {
    let series = WeatherSeries::from_provider_json(&sixty_day_payload()).unwrap();
    let table = CropThresholdTable::default();
    let candidate = first_day() + Days::new(20);

    let advice = advise_planting(series.days(), "MAIZE", &table, candidate);
    assert_eq!(advice.records, accumulate_degree_days(series.days()));
    assert_eq!(advice.window.unwrap().start_date, first_day() + Days::new(17));
    assert!(advice.is_favorable);

    // Re-running with the same input is identical
    assert_eq!(advise_planting(series.days(), "MAIZE", &table, candidate), advice);
}

#[test]
fn test_cumulative_curve_is_monotonic_with_cold_tail() {
    let series = WeatherSeries::from_provider_json(&sixty_day_payload()).unwrap();
    let records = accumulate_degree_days(series.days());

    assert_eq!(records[0].cumulative_gdd, records[0].gdd);
    for pair in records.windows(2) {
        assert!(pair[1].cumulative_gdd >= pair[0].cumulative_gdd);
    }
    // Cold days in the tail contribute nothing
    assert_eq!(records[30].gdd, 0.0);
    assert_eq!(records[30].hdd, 12.0);
}

#[test]
fn test_coffee_needs_more_heat_than_maize() {
    let series = WeatherSeries::from_provider_json(&sixty_day_payload()).unwrap();
    let table = CropThresholdTable::default();
    let records = accumulate_degree_days(series.days());
    let resolver = PlantingWindowResolver::new(&table);

    // 80 + 15 * (i - 9) >= 300 first at i = 24
    let coffee = resolver.resolve("coffee ROBUSTA", &records).unwrap();
    assert_eq!(coffee.start_date, first_day() + Days::new(24));
    assert_eq!(
        resolver.resolve("Coffee Robusta", &records),
        Some(coffee)
    );
}

#[test]
fn test_threshold_out_of_reach_gives_no_recommendation() {
    let series = WeatherSeries::from_provider_json(&sixty_day_payload()).unwrap();
    let table = CropThresholdTable::new([("Banana", DegreeDays::new(5000.0))]);
    let advice = advise_planting(series.days(), "banana", &table, first_day());

    assert!(advice.window.is_none());
    assert!(!advice.is_favorable);
    assert_eq!(normalize_crop_name("banana"), "Banana");
}
