//! Weather provider and narrative composer configuration.

use std::path::PathBuf;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// File holding the provider API key
    #[serde(default = "default_api_key_file")]
    pub api_key_file: PathBuf,
}

fn default_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_timeout_secs() -> u64 {
    WeatherConfig::default().timeout_secs
}

fn default_api_key_file() -> PathBuf {
    PathBuf::from("open_weather_key")
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_file: default_api_key_file(),
        }
    }
}

impl WeatherAppConfig {
    /// Client settings for the OpenWeatherMap client
    #[must_use]
    pub fn client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Narrative composer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Ask the generative backend for narratives; when false the template is always used
    #[serde(default = "super::default_true")]
    pub enabled: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
