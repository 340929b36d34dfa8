use agro_engine_core::{
    advise_planting, estimate_biomass, summarize, CropThresholdTable, PlantingAdvice,
    TreeMeasurement, WeatherSeries,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Planting advice and tree carbon estimates from the command line
#[derive(Parser, Debug)]
#[command(name = "agro-engine-demo")]
#[command(about = "Degree-day planting windows and allometric tree biomass", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Degree-day table, planting window and favorability for a crop
    DegreeDays {
        /// Weather provider JSON (`{"daily": {"time", "temperature_2m_max", "temperature_2m_min"}}`)
        #[arg(short, long)]
        weather: PathBuf,

        /// Crop name as stored in the crop registry
        #[arg(short, long, default_value = "Maize")]
        crop: String,

        /// Planting date to check (YYYY-MM-DD); defaults to the first day of the series
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// JSON object of crop name -> required cumulative GDD, replacing the built-in table
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Above-ground biomass and CO2-equivalent for one tree
    Biomass {
        /// Diameter at breast height in cm
        #[arg(long)]
        diameter: String,

        /// Tree height in m
        #[arg(long)]
        height: String,

        /// Wood density in g/cm³ (default 0.6)
        #[arg(long)]
        density: Option<String>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::DegreeDays {
            weather,
            crop,
            date,
            thresholds,
            json,
        } => run_degree_days(&weather, &crop, date, thresholds.as_deref(), json),
        Command::Biomass {
            diameter,
            height,
            density,
            json,
        } => run_biomass(&diameter, &height, density.as_deref(), json),
    }
}

fn load_thresholds(path: Option<&Path>) -> Result<CropThresholdTable> {
    let Some(path) = path else {
        return Ok(CropThresholdTable::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read threshold table: {}", path.display()))?;
    let table: CropThresholdTable = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse threshold table: {}", path.display()))?;
    info!(crops = table.len(), "loaded threshold table");
    Ok(table)
}

fn run_degree_days(
    weather: &Path,
    crop: &str,
    date: Option<NaiveDate>,
    thresholds: Option<&Path>,
    json: bool,
) -> Result<()> {
    let table = load_thresholds(thresholds)?;
    let payload = fs::read_to_string(weather)
        .with_context(|| format!("Failed to read weather file: {}", weather.display()))?;
    let series = WeatherSeries::from_provider_json(&payload)
        .with_context(|| format!("Invalid weather data in {}", weather.display()))?;

    let Some(candidate) = date.or_else(|| series.days().first().map(|d| d.date)) else {
        println!("Weather series is empty: nothing to compute.");
        return Ok(());
    };

    let advice = advise_planting(series.days(), crop, &table, candidate);
    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print_advice(crop, candidate, &advice);
    }
    Ok(())
}

fn print_advice(crop: &str, candidate: NaiveDate, advice: &PlantingAdvice) {
    println!("{:<12} {:>8} {:>8} {:>8} {:>10}", "date", "HDD", "CDD", "GDD", "cum. GDD");
    for r in &advice.records {
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>8.2} {:>10.2}",
            r.date.to_string(),
            *r.hdd,
            *r.cdd,
            *r.gdd,
            *r.cumulative_gdd
        );
    }

    let summary = summarize(&advice.records);
    println!();
    println!(
        "{} days: HDD {:.2}, CDD {:.2}, GDD {:.2}",
        summary.days, *summary.total_hdd, *summary.total_cdd, *summary.total_gdd
    );

    match advice.window {
        Some(window) => println!(
            "Favorable window for {crop}: {} to {}",
            window.start_date, window.end_date
        ),
        None => println!("No recommendation available for {crop}."),
    }
    let verdict = if advice.is_favorable {
        "favorable"
    } else {
        "not favorable"
    };
    println!("Planting on {candidate}: {verdict}");
}

/// Display rounding: 2 decimals for biomass, 3 for CO2 tonnes
#[derive(Serialize)]
struct BiomassReport {
    agb_kg: String,
    co2_tonnes: String,
}

fn run_biomass(diameter: &str, height: &str, density: Option<&str>, json: bool) -> Result<()> {
    let tree = TreeMeasurement::parse(diameter, height, density)
        .context("Invalid tree measurement")?;
    let estimate = estimate_biomass(&tree);

    let report = BiomassReport {
        agb_kg: format!("{:.2}", *estimate.agb),
        co2_tonnes: format!("{:.3}", *estimate.co2_tonnes),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wood density: {}", tree.effective_wood_density());
        println!("AGB:          {} kg", report.agb_kg);
        println!("CO2:          {} t", report.co2_tonnes);
    }
    Ok(())
}
