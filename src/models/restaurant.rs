use serde::{Deserialize, Serialize};
use super::coordinate::Coordinate;
use super::response::RestaurantInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub cuisines: String,
    pub area: String,
    pub rating: Option<f64>,
    pub delivery_time: Option<u32>,
    pub cost_for_two: String,
    pub address: String,
    pub restaurant_type: String,
    pub lat: f64,
    pub lng: f64,
}

impl RestaurantRecord {
    /// Builds the record for an entity discovered while querying `found_at`.
    pub fn from_info(info: RestaurantInfo, found_at: Coordinate) -> Self {
        Self {
            id: info.id,
            name: info.name.unwrap_or_default(),
            cuisines: info.cuisines.unwrap_or_default().join(", "),
            area: info.area_name.unwrap_or_default(),
            rating: info.avg_rating,
            delivery_time: info
                .sla
                .and_then(|sla| sla.delivery_time)
                .filter(|minutes| *minutes >= 0.0)
                .map(|minutes| minutes.round() as u32),
            cost_for_two: info.cost_for_two.unwrap_or_default(),
            address: info.locality.unwrap_or_default(),
            restaurant_type: info.restaurant_type.unwrap_or_else(|| "N/A".to_string()),
            lat: found_at.lat,
            lng: found_at.lng,
        }
    }

    pub fn found_at(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}
