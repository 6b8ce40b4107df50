//! Build-time Configuration
//!
//! Values are baked in when the wasm bundle is compiled:
//! `FOOD_API_URL=https://api.example.com FOOD_LOG_LEVEL=debug trunk build`

use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend serving `/foods`
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_base_url,
            log_level,
        }
    }
}
