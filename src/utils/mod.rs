pub mod time;

pub use time::{rate_limit_pause, sleep_with_jitter};
