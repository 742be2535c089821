use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use crate::extractors::validator::section_body;
use crate::models::{MenuItemInfo, MenuItemRecord};

/// Flattens the `groupedCard` category tree of a menu document into item rows.
///
/// A section that cannot be read is skipped as a whole; its siblings are still read.
pub fn extract_menu_items(restaurant_id: &str, sections: &[Value]) -> Vec<MenuItemRecord> {
    let mut items = Vec::new();

    for grouped in sections.iter().filter_map(|section| section.get("groupedCard")) {
        let Some(categories) = grouped
            .pointer("/cardGroupMap/REGULAR/cards")
            .and_then(Value::as_array)
        else {
            warn!(restaurant_id = restaurant_id, "Grouped menu card without REGULAR categories");
            continue;
        };

        for (index, category) in categories.iter().enumerate() {
            match parse_category(restaurant_id, category) {
                Ok(parsed) => items.extend(parsed),
                Err(e) => warn!(
                    restaurant_id = restaurant_id,
                    section = index,
                    error = %e,
                    "Error processing menu section"
                ),
            }
        }
    }

    items
}

fn parse_category(restaurant_id: &str, category: &Value) -> Result<Vec<MenuItemRecord>, String> {
    let body = section_body(category).ok_or("section without card body")?;

    // Headers, carousels and nested category groups carry no `itemCards`.
    let Some(item_cards) = body.get("itemCards") else {
        return Ok(Vec::new());
    };
    let item_cards = item_cards.as_array().ok_or("'itemCards' is not a list")?;

    item_cards
        .iter()
        .map(|item| -> Result<MenuItemRecord, String> {
            let info = item.pointer("/card/info").ok_or("item card without 'info'")?;
            let info = MenuItemInfo::deserialize(info).map_err(|e| e.to_string())?;
            Ok(MenuItemRecord::from_info(restaurant_id, info))
        })
        .collect()
}
