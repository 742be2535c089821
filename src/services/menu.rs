use tracing::{info, warn, error};
use crate::extractors::extract_menu_items;
use crate::extractors::validator::sections;
use crate::config::ScrapeConfig;
use crate::models::{Coordinate, MenuItemRecord, RestaurantMenu, RestaurantRecord};
use crate::services::api::RestaurantApi;
use crate::utils::rate_limit_pause;

pub struct MenuFetcher<'a, A: RestaurantApi> {
    api: &'a A,
}

impl<'a, A: RestaurantApi> MenuFetcher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Flat item list of one restaurant's menu; empty when the menu cannot be fetched or read.
    pub async fn fetch_menu(&self, restaurant_id: &str, at: Coordinate) -> Vec<MenuItemRecord> {
        let document = match self.api.fetch_menu(restaurant_id, at).await {
            Ok(document) => document,
            Err(e) => {
                error!(
                    error = %e,
                    restaurant_id = restaurant_id,
                    "Failed to fetch menu"
                );
                return Vec::new();
            }
        };

        let sections = match sections(&document) {
            Ok(sections) => sections,
            Err(reason) => {
                warn!(
                    restaurant_id = restaurant_id,
                    reason = reason,
                    "Invalid menu response structure"
                );
                return Vec::new();
            }
        };

        let items = extract_menu_items(restaurant_id, sections);
        info!(
            restaurant_id = restaurant_id,
            count = items.len(),
            "Menu items found"
        );
        items
    }

    /// Menus of `restaurants`, each fetched at the coordinate where it was discovered.
    ///
    /// Requests are issued one at a time with the configured pause in between; restaurants
    /// whose menu comes back empty are left out.
    pub async fn fetch_menus(
        &self,
        restaurants: &[RestaurantRecord],
        config: &ScrapeConfig,
    ) -> Vec<RestaurantMenu> {
        let mut menus = Vec::new();

        for (index, restaurant) in restaurants.iter().enumerate() {
            if index > 0 {
                rate_limit_pause(config).await;
            }

            info!(
                restaurant = %restaurant.name,
                index = index + 1,
                count = restaurants.len(),
                "Fetching menu"
            );

            let items = self.fetch_menu(&restaurant.id, restaurant.found_at()).await;
            if items.is_empty() {
                continue;
            }
            menus.push(RestaurantMenu {
                restaurant_id: restaurant.id.clone(),
                restaurant_name: restaurant.name.clone(),
                items,
            });
        }

        menus
    }
}
