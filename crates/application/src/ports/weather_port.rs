//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::{City, WeatherReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data operations
///
/// Implementations issue a single provider request per call and never retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a validated city name
    ///
    /// The returned reading carries the provider's resolved city name, which
    /// may differ from the requested one.
    async fn current_weather(&self, city: &City) -> Result<WeatherReading, ApplicationError>;
}
