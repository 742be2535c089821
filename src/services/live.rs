use tracing::info;
use crate::config::ScrapeConfig;
use crate::models::{Coordinate, RestaurantMenu, ScrapeResult};
use crate::services::api::RestaurantApi;
use crate::services::menu::MenuFetcher;
use crate::services::paginator::ListingPaginator;
use crate::services::search::FallbackSearch;

#[derive(Debug, Clone, PartialEq)]
pub struct LiveScrape {
    pub result: ScrapeResult,
    pub menus: Vec<RestaurantMenu>,
}

impl LiveScrape {
    pub fn menu_item_count(&self) -> usize {
        self.menus.iter().map(|menu| menu.items.len()).sum()
    }
}

/// Point search followed by an optional menu pass over what it found.
pub struct LiveScraper<'a, A: RestaurantApi> {
    api: &'a A,
    config: &'a ScrapeConfig,
}

impl<'a, A: RestaurantApi> LiveScraper<'a, A> {
    pub fn new(api: &'a A, config: &'a ScrapeConfig) -> Self {
        Self { api, config }
    }

    pub async fn restaurants_with_menus(
        &self,
        origin: Coordinate,
        max_restaurants: usize,
        include_menus: bool,
        smart_search: bool,
    ) -> LiveScrape {
        info!(
            %origin,
            max_restaurants = max_restaurants,
            include_menus = include_menus,
            smart_search = smart_search,
            "Starting live scrape"
        );

        let paginator = ListingPaginator::new(self.api, self.config);
        let result = FallbackSearch::new(paginator)
            .search_with_fallback(origin, smart_search, Some(max_restaurants))
            .await;

        let menus = if include_menus && result.outcome.is_found() {
            MenuFetcher::new(self.api)
                .fetch_menus(result.restaurants(), self.config)
                .await
        } else {
            Vec::new()
        };

        LiveScrape { result, menus }
    }
}
