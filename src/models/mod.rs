mod coordinate;
mod menu;
mod outcome;
mod report;
mod response;
mod restaurant;

pub use coordinate::{BoundingBox, Coordinate, round_coordinate};
pub use menu::{Diet, MenuItemRecord, RestaurantMenu};
pub use outcome::{ListingOutcome, ScrapeResult};
pub use report::{MenuRow, ScrapeReport, menu_rows};
pub use response::{MenuItemInfo, RestaurantInfo, Sla};
pub use restaurant::RestaurantRecord;
