pub mod cli;
pub mod clients;
pub mod config;
pub mod display;
pub mod error;
pub mod extractors;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
