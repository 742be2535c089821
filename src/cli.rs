use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::models::ScrapeResult;

#[derive(Debug, Parser)]
#[command(
    name = "swiggy-scraper",
    about = "Live Swiggy restaurant scraper (coordinate-driven)"
)]
pub struct Args {
    /// Latitude coordinate (e.g. 12.9716)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude coordinate (e.g. 77.5946)
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
    /// Maximum restaurants to collect; defaults to `scrape.max_restaurants`
    #[arg(long)]
    pub max_restaurants: Option<usize>,
    /// Skip menu scraping
    #[arg(long)]
    pub no_menus: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
    /// Try a small grid around the input when nothing is found there
    #[arg(long)]
    pub smart_search: bool,
    #[arg(long, env = "SWIGGY_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, default_value = "config/default")]
    pub config: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Table,
    Parquet,
}

impl OutputFormat {
    /// JSON goes to stdout as a single document, so progress text moves to stderr.
    pub fn status_on_stderr(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Prints human-readable progress where it cannot corrupt machine output.
pub fn status(format: OutputFormat, text: &str) {
    if format.status_on_stderr() {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "area-sweep",
    about = "Sweep a bounding box on a coordinate grid and save every restaurant found"
)]
pub struct SweepArgs {
    /// Area name, used to name the output files
    #[arg(long, default_value = "Coimbatore")]
    pub name: String,
    #[arg(long, default_value_t = 10.88, allow_negative_numbers = true)]
    pub min_lat: f64,
    #[arg(long, default_value_t = 11.15, allow_negative_numbers = true)]
    pub max_lat: f64,
    #[arg(long, default_value_t = 76.85, allow_negative_numbers = true)]
    pub min_lng: f64,
    #[arg(long, default_value_t = 77.10, allow_negative_numbers = true)]
    pub max_lng: f64,
    /// Grid spacing in degrees; defaults to `scrape.sweep_step`
    #[arg(long)]
    pub step: Option<f64>,
    /// Also fetch the menu of every restaurant found
    #[arg(long)]
    pub with_menus: bool,
    #[arg(long, env = "SWIGGY_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, default_value = "config/default")]
    pub config: String,
}

/// File-name prefix for an area: lowercase, spaces replaced by underscores.
pub fn area_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub const EXIT_SUCCESS: u8 = 0;
/// Unserviceable, empty, interrupted or failed runs all share this status.
pub const EXIT_FAILURE: u8 = 1;

/// Success only when restaurants were found at a serviceable location.
pub fn exit_status(result: &ScrapeResult) -> u8 {
    if result.outcome.is_found() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Logs go to stderr so JSON written to stdout stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
