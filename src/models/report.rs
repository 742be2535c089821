use serde::Serialize;
use chrono::{DateTime, Utc};
use super::coordinate::Coordinate;
use super::menu::{Diet, RestaurantMenu};
use super::restaurant::RestaurantRecord;

/// One flattened menu row as exported, joined with the restaurant name.
#[derive(Debug, Serialize)]
pub struct MenuRow<'a> {
    pub restaurant_id: &'a str,
    pub restaurant_name: &'a str,
    pub item_name: &'a str,
    pub price: f64,
    pub veg: Diet,
    pub category: &'a str,
    pub description: &'a str,
}

pub fn menu_rows(menus: &[RestaurantMenu]) -> Vec<MenuRow<'_>> {
    menus
        .iter()
        .flat_map(|menu| {
            menu.items.iter().map(move |item| MenuRow {
                restaurant_id: &item.restaurant_id,
                restaurant_name: &menu.restaurant_name,
                item_name: &item.item_name,
                price: item.price,
                veg: item.veg,
                category: &item.category,
                description: &item.description,
            })
        })
        .collect()
}

/// The JSON document bundling one live scrape.
#[derive(Debug, Serialize)]
pub struct ScrapeReport<'a> {
    pub location: Coordinate,
    pub restaurants: &'a [RestaurantRecord],
    pub menus: Vec<MenuRow<'a>>,
    pub scraping_time_seconds: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub scraped_at: DateTime<Utc>,
}

impl<'a> ScrapeReport<'a> {
    pub fn new(
        location: Coordinate,
        restaurants: &'a [RestaurantRecord],
        menus: &'a [RestaurantMenu],
        scraping_time_seconds: f64,
    ) -> Self {
        Self {
            location,
            restaurants,
            menus: menu_rows(menus),
            scraping_time_seconds,
            scraped_at: Utc::now(),
        }
    }
}
