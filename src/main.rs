use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use swiggy_scraper::cli::{exit_status, init_tracing, status, Args, OutputFormat, EXIT_FAILURE};
use swiggy_scraper::display::{format_menus, format_outcome, format_restaurants};
use swiggy_scraper::models::{Coordinate, ScrapeReport};
use swiggy_scraper::services::{ApiService, LiveScrape, LiveScraper};
use swiggy_scraper::storage::{report_json, write_report, CsvExporter, ParquetConverter};
use swiggy_scraper::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    tokio::select! {
        outcome = run(args) => match outcome {
            Ok(status) => ExitCode::from(status),
            Err(e) => {
                error!(error = %e, "Scrape aborted");
                eprintln!("❌ Error: {:#}", e);
                ExitCode::from(EXIT_FAILURE)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n⏹️ Operation cancelled by user");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(args: Args) -> Result<u8> {
    let mut settings = Settings::from_file(&args.config)?;
    if let Some(dir) = &args.output_dir {
        settings.output.dir = dir.to_string_lossy().into_owned();
    }

    let origin = Coordinate::new(args.lat, args.lng);
    let max_restaurants = args.max_restaurants.unwrap_or(settings.scrape.max_restaurants);
    let api = ApiService::new(&settings.api)?;
    let scraper = LiveScraper::new(&api, &settings.scrape);

    status(args.output, &format!("🔍 Searching restaurants near {}", origin));

    let scrape = scraper
        .restaurants_with_menus(origin, max_restaurants, !args.no_menus, args.smart_search)
        .await;
    let result = &scrape.result;
    let elapsed = result.elapsed.as_secs_f64();

    if let Some(text) = format_outcome(result, args.smart_search) {
        status(args.output, &text);
        return Ok(exit_status(result));
    }

    if result.used_fallback() {
        status(
            args.output,
            &format!("📍 Nothing at the requested point, using results from {}", result.searched_at),
        );
    }

    info!(
        restaurants = result.restaurants().len(),
        menu_items = scrape.menu_item_count(),
        elapsed_secs = elapsed,
        "Scrape finished"
    );

    write_output(&args, &settings, origin, &scrape).await?;

    Ok(exit_status(result))
}

async fn write_output(
    args: &Args,
    settings: &Settings,
    origin: Coordinate,
    scrape: &LiveScrape,
) -> Result<()> {
    let restaurants = scrape.result.restaurants();
    let elapsed = scrape.result.elapsed.as_secs_f64();
    let dir = PathBuf::from(&settings.output.dir);

    match args.output {
        OutputFormat::Table => {
            print!("{}", format_restaurants(restaurants));
            print!("{}", format_menus(&scrape.menus));
            println!(
                "\n✅ Found {} restaurants and {} menu items in {:.2}s",
                restaurants.len(),
                scrape.menu_item_count(),
                elapsed
            );
        }
        OutputFormat::Json => {
            let report = ScrapeReport::new(origin, restaurants, &scrape.menus, elapsed);
            println!("{}", report_json(&report)?);
            let path = dir.join("report.json");
            write_report(&path, &report).await?;
            status(args.output, &format!("💾 Report saved to {}", path.display()));
        }
        OutputFormat::Csv => {
            let path = dir.join("restaurants.csv");
            CsvExporter::write_restaurants(restaurants, &path)?;
            println!("💾 Restaurants saved to {}", path.display());
            if !scrape.menus.is_empty() {
                let path = dir.join("menus.csv");
                CsvExporter::write_menus(&scrape.menus, &path)?;
                println!("💾 Menus saved to {}", path.display());
            }
        }
        OutputFormat::Parquet => {
            let path = dir.join("restaurants.parquet");
            ParquetConverter::convert_restaurants_to_parquet(restaurants, &path)?;
            println!("💾 Restaurants saved to {}", path.display());
            if !scrape.menus.is_empty() {
                let path = dir.join("menus.parquet");
                ParquetConverter::convert_menus_to_parquet(&scrape.menus, &path)?;
                println!("💾 Menus saved to {}", path.display());
            }
        }
    }

    Ok(())
}
