use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `info` block of one entity in the listing grid.
#[derive(Debug, Deserialize)]
pub struct RestaurantInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisines: Option<Vec<String>>,
    #[serde(rename = "areaName", default)]
    pub area_name: Option<String>,
    #[serde(rename = "avgRating", default, deserialize_with = "lenient_f64")]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub sla: Option<Sla>,
    #[serde(rename = "costForTwo", default, deserialize_with = "optional_string_or_number")]
    pub cost_for_two: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(rename = "restaurantType", default)]
    pub restaurant_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Sla {
    #[serde(rename = "deliveryTime", default, deserialize_with = "lenient_f64")]
    pub delivery_time: Option<f64>,
}

/// `info` block of one item card in a menu section.
#[derive(Debug, Deserialize)]
pub struct MenuItemInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(rename = "defaultPrice", default, deserialize_with = "lenient_f64")]
    pub default_price: Option<f64>,
    #[serde(rename = "isVeg", default, deserialize_with = "number_or_bool")]
    pub is_veg: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string id, got {other}"))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Flags are compared numerically; a quoted "1" is not a flag.
fn number_or_bool<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if b { 1.0 } else { 0.0 }),
        _ => None,
    })
}

// The provider mixes numbers, numeric strings, booleans and placeholders like "--".
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Bool(b)) => Some(if b { 1.0 } else { 0.0 }),
        _ => None,
    })
}
