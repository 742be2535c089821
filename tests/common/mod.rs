#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;
use serde_json::{json, Value};
use swiggy_scraper::config::ScrapeConfig;
use swiggy_scraper::models::Coordinate;
use swiggy_scraper::services::RestaurantApi;
use swiggy_scraper::{Error, Result};

/// Canned provider reply.
#[derive(Debug, Clone)]
pub enum Reply {
    Document(Value),
    /// Stands in for a timeout or refused connection.
    Unreachable,
}

type PointKey = (i64, i64);

fn key(at: Coordinate) -> PointKey {
    ((at.lat * 1e6).round() as i64, (at.lng * 1e6).round() as i64)
}

/// In-memory provider. Listing pages that were not scripted come back as an empty
/// listing; menus that were not scripted are unreachable.
#[derive(Default)]
pub struct FakeApi {
    listings: HashMap<(PointKey, u32), Reply>,
    menus: HashMap<String, Reply>,
    listing_calls: Mutex<Vec<(Coordinate, u32)>>,
    menu_calls: Mutex<Vec<(String, Coordinate)>>,
    request_times: Mutex<Vec<Instant>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, at: Coordinate, offset: u32, reply: Reply) -> Self {
        self.listings.insert((key(at), offset), reply);
        self
    }

    pub fn page(self, at: Coordinate, offset: u32, ids: &[&str]) -> Self {
        self.listing(at, offset, Reply::Document(listing_page(ids)))
    }

    pub fn menu(mut self, restaurant_id: &str, reply: Reply) -> Self {
        self.menus.insert(restaurant_id.to_string(), reply);
        self
    }

    pub fn listing_calls(&self) -> Vec<(Coordinate, u32)> {
        self.listing_calls.lock().unwrap().clone()
    }

    pub fn menu_calls(&self) -> Vec<(String, Coordinate)> {
        self.menu_calls.lock().unwrap().clone()
    }

    /// When each request of either kind was issued, on tokio's clock.
    pub fn request_times(&self) -> Vec<Instant> {
        self.request_times.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestaurantApi for FakeApi {
    async fn fetch_listing_page(&self, at: Coordinate, offset: u32) -> Result<Value> {
        self.request_times.lock().unwrap().push(Instant::now());
        self.listing_calls.lock().unwrap().push((at, offset));
        match self.listings.get(&(key(at), offset)) {
            Some(Reply::Document(doc)) => Ok(doc.clone()),
            Some(Reply::Unreachable) => Err(Error::Status(504)),
            None => Ok(listing_page(&[])),
        }
    }

    async fn fetch_menu(&self, restaurant_id: &str, at: Coordinate) -> Result<Value> {
        self.request_times.lock().unwrap().push(Instant::now());
        self.menu_calls
            .lock()
            .unwrap()
            .push((restaurant_id.to_string(), at));
        match self.menus.get(restaurant_id) {
            Some(Reply::Document(doc)) => Ok(doc.clone()),
            _ => Err(Error::Status(504)),
        }
    }
}

/// Listing document with one restaurant grid holding `ids`, in order.
pub fn listing_page(ids: &[&str]) -> Value {
    let restaurants: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({ "info": {
                "id": id,
                "name": format!("Restaurant {id}"),
                "cuisines": ["South Indian"],
                "areaName": "Gandhipuram",
                "avgRating": 4.1,
                "sla": { "deliveryTime": 30 },
                "costForTwo": "₹300 for two"
            } })
        })
        .collect();

    json!({ "data": { "cards": [
        { "card": { "card": { "id": "filter_widget" } } },
        { "card": { "card": {
            "id": "restaurant_grid_listing_v2",
            "gridElements": { "infoWithStyle": { "restaurants": restaurants } }
        } } }
    ] } })
}

pub fn unserviceable_page() -> Value {
    json!({ "data": { "cards": [
        { "card": { "card": { "id": "swiggy_not_present", "title": "Location Unserviceable" } } }
    ] } })
}

/// Menu document with one category holding `items` (each an item `info` object).
pub fn menu_document(items: Vec<Value>) -> Value {
    let item_cards: Vec<Value> = items
        .into_iter()
        .map(|info| json!({ "card": { "info": info } }))
        .collect();

    json!({ "data": { "cards": [
        { "card": { "card": { "info": { "name": "Restaurant header" } } } },
        { "groupedCard": { "cardGroupMap": { "REGULAR": { "cards": [
            { "card": { "card": { "title": "Recommended", "itemCards": item_cards } } }
        ] } } } }
    ] } })
}

/// Pacing disabled so tests do not sleep.
pub fn fast_config() -> ScrapeConfig {
    ScrapeConfig {
        request_delay_ms: 0,
        delay_jitter_ms: 0,
        ..ScrapeConfig::default()
    }
}
