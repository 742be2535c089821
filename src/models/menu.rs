use serde::{Deserialize, Serialize};
use std::fmt;
use super::response::MenuItemInfo;

/// The provider reports prices in paise.
const MINOR_UNITS_PER_RUPEE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Veg => "Veg",
            Diet::NonVeg => "Non-Veg",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub restaurant_id: String,
    pub item_name: String,
    pub price: f64,
    pub veg: Diet,
    pub category: String,
    pub description: String,
}

impl MenuItemRecord {
    pub fn from_info(restaurant_id: &str, info: MenuItemInfo) -> Self {
        // A zero `price` means "not set" upstream, so it falls through to `defaultPrice`.
        // TODO: revisit the divisor if the provider ever stops sending minor units.
        let minor_units = info
            .price
            .filter(|price| *price != 0.0)
            .or(info.default_price)
            .unwrap_or(0.0);

        let veg = if info.is_veg == Some(1.0) { Diet::Veg } else { Diet::NonVeg };

        Self {
            restaurant_id: restaurant_id.to_string(),
            item_name: info.name.unwrap_or_default(),
            price: minor_units / MINOR_UNITS_PER_RUPEE,
            veg,
            category: info.category.unwrap_or_default(),
            description: info.description.unwrap_or_default(),
        }
    }
}

/// Menu of one restaurant, carrying the display name used by exports.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantMenu {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<MenuItemRecord>,
}
