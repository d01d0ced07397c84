//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: weather provider and narrative composer
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, then `WEATHERCHAT_*` environment variables using `__` as
//! the nesting separator (e.g. `WEATHERCHAT_SERVER__PORT=8080`).

mod server;
mod weather;

use std::path::Path;

use ai_core::InferenceConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use weather::{ComposerConfig, WeatherAppConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEATHERCHAT";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Narrative composer configuration
    #[serde(default)]
    pub composer: ComposerConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config` file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<T>(file: T) -> Result<Self, config::ConfigError>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
