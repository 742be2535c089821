mod common;

use std::time::Duration;

use common::{FakeApi, menu_document};
use serde_json::json;
use swiggy_scraper::config::ScrapeConfig;
use swiggy_scraper::models::{BoundingBox, Coordinate, RestaurantRecord};
use swiggy_scraper::services::{AreaSweep, FallbackSearch, ListingPaginator, MenuFetcher};
use tokio::time::Instant;

const DELAY: Duration = Duration::from_millis(500);

fn paced_config() -> ScrapeConfig {
    ScrapeConfig {
        request_delay_ms: DELAY.as_millis() as u64,
        delay_jitter_ms: 0,
        ..ScrapeConfig::default()
    }
}

/// First request goes out at once; every later one exactly one pause after its predecessor.
fn assert_paced(times: &[Instant], started: Instant, expected_requests: usize) {
    assert_eq!(times.len(), expected_requests);
    assert_eq!(times[0].duration_since(started), Duration::ZERO);
    for pair in times.windows(2) {
        let gap = pair[1].duration_since(pair[0]);
        assert!(gap >= DELAY, "gap {gap:?} shorter than the delay");
        assert!(gap < DELAY * 2, "gap {gap:?} holds more than one pause");
    }
}

fn restaurant(id: &str, at: Coordinate) -> RestaurantRecord {
    RestaurantRecord {
        id: id.to_string(),
        name: format!("Restaurant {id}"),
        cuisines: String::new(),
        area: String::new(),
        rating: None,
        delivery_time: None,
        cost_for_two: String::new(),
        address: String::new(),
        restaurant_type: "N/A".to_string(),
        lat: at.lat,
        lng: at.lng,
    }
}

#[tokio::test(start_paused = true)]
async fn pages_are_spaced_by_the_delay() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1", "R2"])
        .page(at, 16, &["R3"])
        .page(at, 32, &["R1"]);
    let config = paced_config();

    let started = Instant::now();
    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert_eq!(outcome.records().len(), 3);
    assert_paced(&api.request_times(), started, 3);
    assert!(started.elapsed() >= DELAY * 2);
}

#[tokio::test(start_paused = true)]
async fn fallback_neighbours_are_spaced_by_the_delay() {
    let origin = Coordinate::new(12.0, 77.0);
    let api = FakeApi::new().page(Coordinate::new(12.001, 77.001), 0, &["N1"]);
    let config = paced_config();

    let started = Instant::now();
    let result = FallbackSearch::new(ListingPaginator::new(&api, &config))
        .search_with_fallback(origin, true, None)
        .await;

    assert!(result.used_fallback());
    // Origin, first neighbour, and the empty second page at that neighbour.
    assert_paced(&api.request_times(), started, 3);
}

#[tokio::test(start_paused = true)]
async fn sweep_cells_are_spaced_by_the_delay() {
    let bbox = BoundingBox::new(11.0, 11.01, 77.0, 77.005).expect("bbox");
    let api = FakeApi::new();
    let config = paced_config();

    let started = Instant::now();
    let report = AreaSweep::new(ListingPaginator::new(&api, &config))
        .sweep(&bbox, 0.005, None)
        .await
        .expect("sweep");

    assert_eq!(report.cells, 2);
    assert_paced(&api.request_times(), started, 2);
}

#[tokio::test(start_paused = true)]
async fn menu_fetches_are_spaced_by_the_delay() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new().menu(
        "R1",
        common::Reply::Document(menu_document(vec![json!({ "name": "Idli", "price": 3000 })])),
    );
    let config = paced_config();
    let restaurants: Vec<RestaurantRecord> =
        ["R1", "R2", "R3"].iter().map(|id| restaurant(id, at)).collect();

    let started = Instant::now();
    let menus = MenuFetcher::new(&api).fetch_menus(&restaurants, &config).await;

    assert_eq!(menus.len(), 1);
    assert_paced(&api.request_times(), started, 3);
}
