use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::extractors::validator::{section_body, section_id, sections};
use crate::models::{Coordinate, RestaurantInfo, RestaurantRecord};

/// Section id of the card that carries the restaurant grid.
pub const RESTAURANT_GRID_CARD_ID: &str = "restaurant_grid_listing_v2";

/// Restaurants listed on one page, in page order. Entities that cannot be read are skipped.
pub fn extract_restaurants(page: &Value, found_at: Coordinate) -> Vec<RestaurantRecord> {
    let Ok(sections) = sections(page) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for section in sections.iter().filter(|s| section_id(s) == Some(RESTAURANT_GRID_CARD_ID)) {
        let entities = section_body(section)
            .and_then(|body| body.pointer("/gridElements/infoWithStyle/restaurants"))
            .and_then(Value::as_array);

        let Some(entities) = entities else {
            warn!(
                lat = found_at.lat,
                lng = found_at.lng,
                "Restaurant grid card without a restaurant list"
            );
            continue;
        };

        debug!(
            lat = found_at.lat,
            lng = found_at.lng,
            count = entities.len(),
            "Restaurant grid found"
        );

        for entity in entities {
            match parse_entity(entity) {
                Ok(info) => records.push(RestaurantRecord::from_info(info, found_at)),
                Err(e) => warn!(error = %e, "Skipping unreadable restaurant entry"),
            }
        }
    }

    records
}

fn parse_entity(entity: &Value) -> Result<RestaurantInfo, String> {
    let info = entity.get("info").ok_or("entry without 'info' block")?;
    RestaurantInfo::deserialize(info).map_err(|e| e.to_string())
}
