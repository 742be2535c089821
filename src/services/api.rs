use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use crate::clients::HttpClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::Coordinate;

/// Fixed listing query parameters expected by the provider.
const LISTING_PARAMS: [(&str, &str); 2] = [
    ("sortBy", "RELEVANCE"),
    ("page_type", "DESKTOP_WEB_LISTING"),
];

/// Fixed menu query parameters expected by the provider.
const MENU_PARAMS: [(&str, &str); 2] = [
    ("page-type", "REGULAR_MENU"),
    ("complete-menu", "true"),
];

/// Raw access to the provider's listing and menu endpoints.
///
/// Every call is one request; callers own pacing and interpretation of the documents.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    async fn fetch_listing_page(&self, at: Coordinate, offset: u32) -> Result<Value>;

    async fn fetch_menu(&self, restaurant_id: &str, at: Coordinate) -> Result<Value>;
}

pub struct ApiService {
    client: HttpClient,
    listing_url: String,
    menu_url: String,
}

impl ApiService {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api)?,
            listing_url: api.listing_url.clone(),
            menu_url: api.menu_url.clone(),
        })
    }
}

#[async_trait]
impl RestaurantApi for ApiService {
    async fn fetch_listing_page(&self, at: Coordinate, offset: u32) -> Result<Value> {
        let mut query = vec![
            ("lat", at.lat.to_string()),
            ("lng", at.lng.to_string()),
            ("offset", offset.to_string()),
        ];
        query.extend(LISTING_PARAMS.iter().map(|(k, v)| (*k, v.to_string())));

        debug!(
            lat = at.lat,
            lng = at.lng,
            offset = offset,
            "Requesting listing page"
        );

        self.client.get_json(&self.listing_url, &query).await
    }

    async fn fetch_menu(&self, restaurant_id: &str, at: Coordinate) -> Result<Value> {
        let mut query: Vec<(&str, String)> =
            MENU_PARAMS.iter().map(|(k, v)| (*k, v.to_string())).collect();
        query.extend([
            ("lat", at.lat.to_string()),
            ("lng", at.lng.to_string()),
            ("restaurantId", restaurant_id.to_string()),
        ]);

        debug!(
            restaurant_id = restaurant_id,
            lat = at.lat,
            lng = at.lng,
            "Requesting menu"
        );

        self.client.get_json(&self.menu_url, &query).await
    }
}
