pub mod api;
pub mod live;
pub mod menu;
pub mod paginator;
pub mod search;
pub mod sweep;

pub use api::{ApiService, RestaurantApi};
pub use live::{LiveScrape, LiveScraper};
pub use menu::MenuFetcher;
pub use paginator::ListingPaginator;
pub use search::{FallbackSearch, fallback_neighbours};
pub use sweep::{AreaSweep, SweepReport};
