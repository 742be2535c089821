mod common;

use common::{fast_config, listing_page, unserviceable_page, FakeApi, Reply};
use serde_json::json;
use swiggy_scraper::models::{Coordinate, ListingOutcome};
use swiggy_scraper::services::{fallback_neighbours, FallbackSearch, ListingPaginator};

fn ids(outcome: &ListingOutcome) -> Vec<&str> {
    outcome.records().iter().map(|r| r.id.as_str()).collect()
}

fn offsets(api: &FakeApi) -> Vec<u32> {
    api.listing_calls().into_iter().map(|(_, offset)| offset).collect()
}

#[tokio::test]
async fn overlapping_pages_are_deduplicated_in_discovery_order() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1", "R2", "R3"])
        .page(at, 16, &["R3", "R4"])
        .page(at, 32, &["R4", "R5"]);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert_eq!(ids(&outcome), vec!["R1", "R2", "R3", "R4", "R5"]);
    let first = &outcome.records()[0];
    assert_eq!((first.lat, first.lng), (at.lat, at.lng));
    assert_eq!(first.cuisines, "South Indian");
    assert_eq!(first.delivery_time, Some(30));
    // Offset 48 is the unscripted empty listing that ends the walk.
    assert_eq!(offsets(&api), vec![0, 16, 32, 48]);
}

#[tokio::test]
async fn page_of_known_restaurants_stops_pagination() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1", "R2"])
        .page(at, 16, &["R2", "R1"])
        .page(at, 32, &["R3"]);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert_eq!(ids(&outcome), vec!["R1", "R2"]);
    assert_eq!(offsets(&api), vec![0, 16]);
}

#[tokio::test]
async fn unserviceable_first_page_ignores_the_limit() {
    let at = Coordinate::new(28.7041, 77.1025);
    let config = fast_config();

    for max in [None, Some(1), Some(50)] {
        let api = FakeApi::new().listing(at, 0, Reply::Document(unserviceable_page()));
        let outcome = ListingPaginator::new(&api, &config).paginate(at, max).await;
        assert_eq!(outcome, ListingOutcome::Unserviceable);
        assert_eq!(offsets(&api), vec![0]);
    }
}

#[tokio::test]
async fn unserviceable_later_page_discards_collected_records() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1", "R2"])
        .listing(at, 16, Reply::Document(unserviceable_page()))
        .page(at, 32, &["R3"]);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert_eq!(outcome, ListingOutcome::Unserviceable);
    assert!(outcome.records().is_empty());
    assert_eq!(offsets(&api), vec![0, 16]);
}

#[tokio::test]
async fn failure_after_two_pages_keeps_what_was_collected() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1", "R2"])
        .page(at, 16, &["R3"])
        .listing(at, 32, Reply::Unreachable);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert!(outcome.is_found());
    assert_eq!(ids(&outcome), vec!["R1", "R2", "R3"]);
    assert_eq!(offsets(&api), vec![0, 16, 32]);
}

#[tokio::test]
async fn malformed_later_page_keeps_what_was_collected() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new()
        .page(at, 0, &["R1"])
        .listing(at, 16, Reply::Document(json!({ "statusCode": 1, "data": null })));
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, None).await;

    assert_eq!(ids(&outcome), vec!["R1"]);
}

#[tokio::test]
async fn failure_on_first_page_is_reported() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new().listing(at, 0, Reply::Unreachable);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, Some(10)).await;

    assert!(matches!(outcome, ListingOutcome::Failed(_)));
    assert!(!outcome.is_conclusive());
}

#[tokio::test]
async fn limit_truncates_within_a_page() {
    let at = Coordinate::new(11.0168, 76.9558);
    let page: Vec<String> = (1..=16).map(|i| format!("R{i}")).collect();
    let page: Vec<&str> = page.iter().map(String::as_str).collect();
    let api = FakeApi::new().page(at, 0, &page).page(at, 16, &["R17"]);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, Some(5)).await;

    assert_eq!(ids(&outcome), vec!["R1", "R2", "R3", "R4", "R5"]);
    assert_eq!(offsets(&api), vec![0]);
}

#[tokio::test]
async fn zero_limit_makes_no_request() {
    let at = Coordinate::new(11.0168, 76.9558);
    let api = FakeApi::new().page(at, 0, &["R1"]);
    let config = fast_config();

    let outcome = ListingPaginator::new(&api, &config).paginate(at, Some(0)).await;

    assert_eq!(outcome, ListingOutcome::Empty);
    assert!(api.listing_calls().is_empty());
}

#[tokio::test]
async fn fallback_stops_at_first_neighbour_with_results() {
    let origin = Coordinate::new(12.0, 77.0);
    let hit = Coordinate::new(12.002, 76.999);
    let api = FakeApi::new().page(hit, 0, &["N1", "N2"]);
    let config = fast_config();

    let search = FallbackSearch::new(ListingPaginator::new(&api, &config));
    let result = search.search_with_fallback(origin, true, Some(20)).await;

    assert_eq!(ids(&result.outcome), vec!["N1", "N2"]);
    assert_eq!(result.origin, origin);
    assert_eq!(result.searched_at, hit);
    assert!(result.used_fallback());
    assert!(result.restaurants().iter().all(|r| r.found_at() == hit));

    let neighbours = fallback_neighbours(origin, &config.fallback_steps);
    let probed: Vec<Coordinate> = api.listing_calls().into_iter().map(|(at, _)| at).collect();
    assert_eq!(probed[0], origin);
    assert_eq!(&probed[1..10], &neighbours[..9]);
    assert!(probed[10..].iter().all(|at| *at == hit));
    assert!(!probed.contains(&neighbours[10]));
}

#[tokio::test]
async fn fallback_is_skipped_when_disabled() {
    let origin = Coordinate::new(12.0, 77.0);
    let api = FakeApi::new().page(Coordinate::new(12.001, 77.001), 0, &["N1"]);
    let config = fast_config();

    let search = FallbackSearch::new(ListingPaginator::new(&api, &config));
    let result = search.search_with_fallback(origin, false, Some(20)).await;

    assert_eq!(result.outcome, ListingOutcome::Empty);
    assert!(!result.used_fallback());
    assert_eq!(api.listing_calls().len(), 1);
}

#[tokio::test]
async fn unserviceable_origin_does_not_trigger_fallback() {
    let origin = Coordinate::new(12.0, 77.0);
    let api = FakeApi::new()
        .listing(origin, 0, Reply::Document(unserviceable_page()))
        .page(Coordinate::new(12.001, 77.001), 0, &["N1"]);
    let config = fast_config();

    let search = FallbackSearch::new(ListingPaginator::new(&api, &config));
    let result = search.search_with_fallback(origin, true, None).await;

    assert!(result.is_unserviceable());
    assert_eq!(api.listing_calls().len(), 1);
}

#[tokio::test]
async fn exhausted_fallback_reports_origin() {
    let origin = Coordinate::new(12.0, 77.0);
    let api = FakeApi::new().listing(origin, 0, Reply::Document(listing_page(&[])));
    let config = fast_config();

    let search = FallbackSearch::new(ListingPaginator::new(&api, &config));
    let result = search.search_with_fallback(origin, true, None).await;

    assert_eq!(result.outcome, ListingOutcome::Empty);
    assert_eq!(result.searched_at, origin);
    assert_eq!(api.listing_calls().len(), 1 + 16);
}
