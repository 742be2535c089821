use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{error, warn};

use swiggy_scraper::cli::{area_slug, init_tracing, SweepArgs, EXIT_FAILURE, EXIT_SUCCESS};
use swiggy_scraper::extractors::ResponseValidator;
use swiggy_scraper::models::BoundingBox;
use swiggy_scraper::services::{ApiService, AreaSweep, ListingPaginator, MenuFetcher};
use swiggy_scraper::storage::{CsvExporter, JsonWriter};
use swiggy_scraper::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = SweepArgs::parse();

    match run(args).await {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!(error = %e, "Sweep aborted");
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(args: SweepArgs) -> Result<u8> {
    let mut settings = Settings::from_file(&args.config)?;
    if let Some(dir) = &args.output_dir {
        settings.output.dir = dir.to_string_lossy().into_owned();
    }

    let bbox = BoundingBox::new(args.min_lat, args.max_lat, args.min_lng, args.max_lng)?;
    let step = args.step.unwrap_or(settings.scrape.sweep_step);

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    println!("Starting sweep of {} at: {}", args.name, timestamp);

    let dir = PathBuf::from(&settings.output.dir);
    let slug = area_slug(&args.name);
    let stream_path = dir.join(format!("{}_restaurants.jsonl", slug));
    let csv_path = dir.join(format!("{}_restaurants.csv", slug));
    let menus_path = dir.join(format!("{}_menus.csv", slug));

    let api = ApiService::new(&settings.api)?;
    let validator = ResponseValidator::with_debug_payload(dir.join(&settings.output.debug_payload));
    let paginator = ListingPaginator::new(&api, &settings.scrape).with_validator(validator);
    let sweeper = AreaSweep::new(paginator);

    let mut writer = JsonWriter::create(&stream_path).await?;

    let report = tokio::select! {
        report = sweeper.sweep(&bbox, step, Some(&mut writer)) => Some(report?),
        _ = tokio::signal::ctrl_c() => None,
    };

    let streamed = writer.finish().await?;

    let Some(report) = report else {
        eprintln!("\n⏹️ Sweep cancelled by user");
        println!("Partial results ({} restaurants): {}", streamed, stream_path.display());
        return Ok(EXIT_FAILURE);
    };

    CsvExporter::write_restaurants(&report.restaurants, &csv_path)?;

    let mut menu_items = 0;
    if args.with_menus && !report.restaurants.is_empty() {
        let menus = MenuFetcher::new(&api)
            .fetch_menus(&report.restaurants, &settings.scrape)
            .await;
        menu_items = menus.iter().map(|menu| menu.items.len()).sum::<usize>();
        if menus.is_empty() {
            warn!("No menus could be fetched for the swept restaurants");
        } else {
            CsvExporter::write_menus(&menus, &menus_path)?;
        }
    }

    let total_secs = report.elapsed.as_secs_f64();

    println!("\nExtraction Summary:");
    println!("Timestamp: {}", timestamp);
    println!("Area: {}", args.name);
    println!(
        "Bounding Box: lat {}..{}, lng {}..{}",
        bbox.min_lat, bbox.max_lat, bbox.min_lng, bbox.max_lng
    );
    println!("Grid Step: {}", step);
    println!("Cells Searched: {}", report.cells);
    println!("Unserviceable Cells: {}", report.unserviceable_cells);
    println!("Failed Cells: {}", report.failed_cells);
    println!("Unique Restaurants: {}", report.restaurants.len());
    if args.with_menus {
        println!("Menu Items: {}", menu_items);
    }
    println!("Sweep Time: {:.2} minutes", total_secs / 60.0);
    println!("Output File: {}", csv_path.display());
    println!("Stream File: {}", stream_path.display());

    if report.restaurants.is_empty() {
        Ok(EXIT_FAILURE)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
