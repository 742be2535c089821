use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use config::{Config, ConfigError};
use tracing::debug;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; SM-G975F) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub scrape: ScrapeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub listing_url: String,
    pub menu_url: String,
    pub timeout_secs: u64,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScrapeConfig {
    /// Pause between two consecutive requests to the provider.
    pub request_delay_ms: u64,
    pub delay_jitter_ms: u64,
    /// Provider page size; the listing offset advances by this much.
    pub page_step: u32,
    /// Live-mode record limit when none is given on the command line.
    pub max_restaurants: usize,
    /// Signed degree offsets combined pairwise into fallback neighbours.
    pub fallback_steps: Vec<f64>,
    pub sweep_step: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    pub dir: String,
    /// Last malformed listing payload seen during a sweep, overwritten each time.
    pub debug_payload: String,
}

impl Default for Settings {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("user-agent".to_string(), DEFAULT_USER_AGENT.to_string());

        Self {
            api: ApiConfig {
                listing_url: "https://www.swiggy.com/dapi/restaurants/list/v5".to_string(),
                menu_url: "https://www.swiggy.com/dapi/menu/pl".to_string(),
                timeout_secs: 10,
                headers,
            },
            scrape: ScrapeConfig::default(),
            output: OutputConfig {
                dir: "data".to_string(),
                debug_payload: "debug_sw_res.json".to_string(),
            },
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 500,
            delay_jitter_ms: 0,
            page_step: 16,
            max_restaurants: 20,
            fallback_steps: vec![0.001, -0.001, 0.002, -0.002],
            sweep_step: 0.005,
        }
    }
}

impl Settings {
    /// Built-in defaults, overlaid by the optional file at `path` and then `APP__*` variables.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;

        if let Ok(headers) = config.get_table("api.headers") {
            debug!(
                ?headers,
                "Loaded API headers from configuration"
            );
        }

        let settings: Settings = config.try_deserialize()?;

        debug!(
            listing_url = %settings.api.listing_url,
            menu_url = %settings.api.menu_url,
            request_delay_ms = settings.scrape.request_delay_ms,
            page_step = settings.scrape.page_step,
            "Parsed settings"
        );

        Ok(settings)
    }
}
