use std::time::Duration;
use super::coordinate::Coordinate;
use super::restaurant::RestaurantRecord;

/// Result of walking the listing at one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingOutcome {
    /// At least one restaurant, deduplicated, in discovery order. May be partial if a later
    /// page failed.
    Found(Vec<RestaurantRecord>),
    /// The provider serves the coordinate but listed nothing.
    Empty,
    /// The provider does not operate at the coordinate.
    Unserviceable,
    /// Nothing was collected because the first page could not be fetched or understood.
    Failed(String),
}

impl ListingOutcome {
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        if records.is_empty() {
            ListingOutcome::Empty
        } else {
            ListingOutcome::Found(records)
        }
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        match self {
            ListingOutcome::Found(records) => records,
            _ => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ListingOutcome::Found(_))
    }

    pub fn is_unserviceable(&self) -> bool {
        matches!(self, ListingOutcome::Unserviceable)
    }

    /// Found records or an unserviceable verdict both end a fallback search.
    pub fn is_conclusive(&self) -> bool {
        self.is_found() || self.is_unserviceable()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeResult {
    /// Coordinate the caller asked for.
    pub origin: Coordinate,
    /// Coordinate whose listing produced `outcome`; differs from `origin` after a fallback hit.
    pub searched_at: Coordinate,
    pub outcome: ListingOutcome,
    pub elapsed: Duration,
}

impl ScrapeResult {
    pub fn restaurants(&self) -> &[RestaurantRecord] {
        self.outcome.records()
    }

    pub fn is_unserviceable(&self) -> bool {
        self.outcome.is_unserviceable()
    }

    pub fn used_fallback(&self) -> bool {
        self.origin != self.searched_at
    }
}
