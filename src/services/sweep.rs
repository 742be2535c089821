use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{info, error};
use crate::error::Result;
use crate::models::{BoundingBox, ListingOutcome, RestaurantRecord};
use crate::services::api::RestaurantApi;
use crate::services::paginator::ListingPaginator;
use crate::storage::JsonWriter;
use crate::utils::rate_limit_pause;

#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Unique restaurants in discovery order, each located at the first cell that listed it.
    pub restaurants: Vec<RestaurantRecord>,
    pub cells: usize,
    pub unserviceable_cells: usize,
    pub failed_cells: usize,
    pub elapsed: Duration,
}

/// Batch scrape of every lattice point of an area, merged into one deduplicated set.
pub struct AreaSweep<'a, A: RestaurantApi> {
    paginator: ListingPaginator<'a, A>,
}

impl<'a, A: RestaurantApi> AreaSweep<'a, A> {
    pub fn new(paginator: ListingPaginator<'a, A>) -> Self {
        Self { paginator }
    }

    /// Walks the listing at every lattice point of `bbox`, without fallback or record limit.
    ///
    /// New restaurants are appended to `sink` as soon as they are discovered.
    pub async fn sweep(
        &self,
        bbox: &BoundingBox,
        step: f64,
        mut sink: Option<&mut JsonWriter>,
    ) -> Result<SweepReport> {
        let started = Instant::now();
        let cells = bbox.lattice(step)?;
        let total = cells.len();

        info!(cells = total, step = step, "Sweeping area");

        let mut seen: HashSet<String> = HashSet::new();
        let mut restaurants: Vec<RestaurantRecord> = Vec::new();
        let mut unserviceable_cells = 0;
        let mut failed_cells = 0;

        for (index, cell) in cells.into_iter().enumerate() {
            if index > 0 {
                rate_limit_pause(self.paginator.config()).await;
            }

            info!(cell = index + 1, cells = total, at = %cell, "Fetching cell");

            let found = match self.paginator.paginate(cell, None).await {
                ListingOutcome::Found(records) => records,
                ListingOutcome::Empty => continue,
                ListingOutcome::Unserviceable => {
                    unserviceable_cells += 1;
                    continue;
                }
                ListingOutcome::Failed(reason) => {
                    error!(at = %cell, reason = %reason, "Cell failed");
                    failed_cells += 1;
                    continue;
                }
            };

            let before = restaurants.len();
            for record in found {
                if !seen.insert(record.id.clone()) {
                    continue;
                }
                if let Some(writer) = sink.as_deref_mut() {
                    if let Err(e) = writer.write_record(&record).await {
                        error!(error = %e, restaurant_id = %record.id, "Error writing restaurant to file");
                    }
                }
                restaurants.push(record);
            }

            info!(
                at = %cell,
                new = restaurants.len() - before,
                total = restaurants.len(),
                "Cell merged"
            );
        }

        Ok(SweepReport {
            restaurants,
            cells: total,
            unserviceable_cells,
            failed_cells,
            elapsed: started.elapsed(),
        })
    }
}
