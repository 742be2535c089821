pub mod menu_extractor;
pub mod restaurant_extractor;
pub mod validator;

pub use menu_extractor::extract_menu_items;
pub use restaurant_extractor::{RESTAURANT_GRID_CARD_ID, extract_restaurants};
pub use validator::{ResponseCheck, ResponseValidator, UNSERVICEABLE_CARD_ID};
