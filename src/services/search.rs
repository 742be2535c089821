use std::time::Instant;
use tracing::info;
use crate::models::{Coordinate, ScrapeResult};
use crate::services::api::RestaurantApi;
use crate::services::paginator::ListingPaginator;
use crate::utils::rate_limit_pause;

/// Neighbours of `origin` probed by the fallback, in probe order: every `(dlat, dlng)` pair
/// from `steps` with latitude as the outer loop, rounded, without the origin or repeats.
pub fn fallback_neighbours(origin: Coordinate, steps: &[f64]) -> Vec<Coordinate> {
    let origin = origin.rounded();
    let mut neighbours: Vec<Coordinate> = Vec::new();
    for &dlat in steps {
        for &dlng in steps {
            let candidate = origin.offset(dlat, dlng);
            if candidate != origin && !neighbours.contains(&candidate) {
                neighbours.push(candidate);
            }
        }
    }
    neighbours
}

/// Point search that falls back to a small grid around the origin when it comes back empty.
pub struct FallbackSearch<'a, A: RestaurantApi> {
    paginator: ListingPaginator<'a, A>,
}

impl<'a, A: RestaurantApi> FallbackSearch<'a, A> {
    pub fn new(paginator: ListingPaginator<'a, A>) -> Self {
        Self { paginator }
    }

    pub async fn search_with_fallback(
        &self,
        origin: Coordinate,
        enable_fallback: bool,
        max_records: Option<usize>,
    ) -> ScrapeResult {
        let started = Instant::now();
        let outcome = self.paginator.paginate(origin, max_records).await;

        if outcome.is_conclusive() || !enable_fallback {
            return ScrapeResult {
                origin,
                searched_at: origin,
                outcome,
                elapsed: started.elapsed(),
            };
        }

        info!(%origin, "No restaurants found, searching nearby points");

        let steps = &self.paginator.config().fallback_steps;
        for neighbour in fallback_neighbours(origin, steps) {
            rate_limit_pause(self.paginator.config()).await;

            let attempt = self.paginator.paginate(neighbour, max_records).await;
            if attempt.is_conclusive() {
                if attempt.is_found() {
                    info!(at = %neighbour, count = attempt.records().len(), "Nearby search found restaurants");
                }
                return ScrapeResult {
                    origin,
                    searched_at: neighbour,
                    outcome: attempt,
                    elapsed: started.elapsed(),
                };
            }
        }

        info!(%origin, "Nearby search found no restaurants");

        ScrapeResult {
            origin,
            searched_at: origin,
            outcome,
            elapsed: started.elapsed(),
        }
    }
}
