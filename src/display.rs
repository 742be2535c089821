use crate::models::{ListingOutcome, RestaurantMenu, RestaurantRecord, ScrapeResult};

/// Menu items listed per restaurant before the rest is summarised.
const MENU_PREVIEW_ITEMS: usize = 5;
const RULE_WIDTH: usize = 80;

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_restaurants(restaurants: &[RestaurantRecord]) -> String {
    let mut out = String::new();
    out.push_str("\n🏪 RESTAURANTS:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (index, restaurant) in restaurants.iter().enumerate() {
        out.push_str(&format!("{:2}. {}\n", index + 1, restaurant.name));
        out.push_str(&format!("    📍 {} • {}\n", restaurant.area, restaurant.cuisines));
        out.push_str(&format!(
            "    ⭐ Rating: {} • 🕐 Delivery: {} min\n",
            or_dash(restaurant.rating),
            or_dash(restaurant.delivery_time)
        ));
        out.push_str(&format!("    💰 Cost for two: {}\n", restaurant.cost_for_two));
        out.push_str(&format!("    (lat={}, lng={})\n\n", restaurant.lat, restaurant.lng));
    }

    out
}

pub fn format_menus(menus: &[RestaurantMenu]) -> String {
    let mut out = String::new();
    if menus.is_empty() {
        return out;
    }

    out.push_str("\n🍽️ MENU ITEMS:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for menu in menus {
        out.push_str(&format!("\n📋 {} ({} items):\n", menu.restaurant_name, menu.items.len()));
        for item in menu.items.iter().take(MENU_PREVIEW_ITEMS) {
            out.push_str(&format!("    • {} - ₹{:.0} ({})\n", item.item_name, item.price, item.veg));
        }
        if menu.items.len() > MENU_PREVIEW_ITEMS {
            out.push_str(&format!(
                "    ... and {} more items\n",
                menu.items.len() - MENU_PREVIEW_ITEMS
            ));
        }
    }

    out
}

/// Explanation of a search that produced no restaurants; `None` when something was found.
pub fn format_outcome(result: &ScrapeResult, smart_search: bool) -> Option<String> {
    let origin = result.origin;
    let mut text = match &result.outcome {
        ListingOutcome::Found(_) => return None,
        ListingOutcome::Unserviceable => format!("🚫 Swiggy does not deliver to {}", origin),
        ListingOutcome::Empty if smart_search => format!("😕 No restaurants found near {}", origin),
        ListingOutcome::Empty => format!(
            "😕 No restaurants found near {}\nTry again with --smart-search to probe nearby points",
            origin
        ),
        ListingOutcome::Failed(reason) => {
            format!("❌ Could not fetch restaurants near {}: {}", origin, reason)
        }
    };
    text.push_str(&format!("\nTime: {:.2}s", result.elapsed.as_secs_f64()));
    Some(text)
}
