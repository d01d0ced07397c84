//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{City, WeatherReading};
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap current weather API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by a new OpenWeatherMap client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config, api_key)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wrap an existing client
    pub fn from_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Upstream { status, message } => ApplicationError::Upstream {
                status: Some(status),
                message,
            },
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::Timeout(_) => ApplicationError::Upstream {
                status: None,
                message: err.to_string(),
            },
            WeatherError::MalformedResponse(e) => ApplicationError::MalformedResponse(e),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(&self, city: &City) -> Result<WeatherReading, ApplicationError> {
        let reading = self
            .client
            .current_by_city(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(resolved = %reading.city, "Weather adapter returned reading");
        Ok(reading)
    }
}
