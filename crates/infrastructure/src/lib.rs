//! Infrastructure layer - Adapters, configuration and telemetry
//!
//! Implements the application ports on top of the integration crates and
//! provides process-level setup: configuration loading, credential files and
//! the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod credentials;
pub mod telemetry;

pub use adapters::{OllamaInferenceAdapter, WeatherAdapter};
pub use config::{AppConfig, ComposerConfig, ServerConfig, WeatherAppConfig};
pub use credentials::{CredentialError, load_api_key};
pub use telemetry::{LogFormat, init_tracing};
