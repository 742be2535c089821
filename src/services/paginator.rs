use std::collections::HashSet;
use tracing::{debug, info, warn};
use crate::config::ScrapeConfig;
use crate::extractors::{ResponseCheck, ResponseValidator, extract_restaurants};
use crate::models::{Coordinate, ListingOutcome, RestaurantRecord};
use crate::services::api::RestaurantApi;
use crate::utils::rate_limit_pause;

/// Walks the offset-paginated listing at one coordinate.
pub struct ListingPaginator<'a, A: RestaurantApi> {
    api: &'a A,
    config: &'a ScrapeConfig,
    validator: ResponseValidator,
}

impl<'a, A: RestaurantApi> ListingPaginator<'a, A> {
    pub fn new(api: &'a A, config: &'a ScrapeConfig) -> Self {
        Self {
            api,
            config,
            validator: ResponseValidator::new(),
        }
    }

    pub fn with_validator(mut self, validator: ResponseValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        self.config
    }

    /// Collects restaurants listed at `at`, deduplicated by id, in discovery order.
    ///
    /// Stops at the first page contributing nothing new, once `max_records` is reached,
    /// or at the first transport or shape failure. Failures never escape: whatever was
    /// gathered before them is returned.
    pub async fn paginate(&self, at: Coordinate, max_records: Option<usize>) -> ListingOutcome {
        if max_records == Some(0) {
            return ListingOutcome::Empty;
        }

        let limit_reached = |count: usize| max_records.is_some_and(|max| count >= max);
        let mut records: Vec<RestaurantRecord> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut offset: u32 = 0;

        loop {
            if offset > 0 {
                rate_limit_pause(self.config).await;
            }

            let page = match self.api.fetch_listing_page(at, offset).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        error = %e,
                        lat = at.lat,
                        lng = at.lng,
                        offset = offset,
                        "Listing request failed"
                    );
                    return interrupted(records, format!("request at offset {offset} failed: {e}"));
                }
            };

            match self.validator.check(&page, at, offset) {
                ResponseCheck::Valid => {}
                ResponseCheck::Unserviceable => return ListingOutcome::Unserviceable,
                ResponseCheck::Malformed(reason) => {
                    warn!(offset = offset, "Invalid response structure, stopping pagination");
                    return interrupted(records, format!("offset {offset}: {reason}"));
                }
            }

            let candidates = extract_restaurants(&page, at);
            let listed = candidates.len();
            let mut added = 0usize;
            for record in candidates {
                if limit_reached(records.len()) {
                    break;
                }
                if seen.insert(record.id.clone()) {
                    records.push(record);
                    added += 1;
                }
            }

            debug!(
                lat = at.lat,
                lng = at.lng,
                offset = offset,
                listed = listed,
                added = added,
                total = records.len(),
                "Listing page processed"
            );

            if added == 0 {
                debug!(offset = offset, "No new restaurants on page");
                break;
            }
            if limit_reached(records.len()) {
                break;
            }
            offset += self.config.page_step;
        }

        info!(
            lat = at.lat,
            lng = at.lng,
            count = records.len(),
            "Listing walk finished"
        );

        ListingOutcome::from_records(records)
    }
}

fn interrupted(records: Vec<RestaurantRecord>, reason: String) -> ListingOutcome {
    if records.is_empty() {
        ListingOutcome::Failed(reason)
    } else {
        ListingOutcome::Found(records)
    }
}
