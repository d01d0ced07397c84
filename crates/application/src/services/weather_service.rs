//! Weather service - validated current weather lookups

use std::{fmt, sync::Arc};

use domain::{City, WeatherReading};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Fetches current conditions for a city through the weather port
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Fetch the current reading for a raw city name
    ///
    /// The name is validated before any outbound call. One provider request
    /// is made per call; failures are returned, never retried.
    #[instrument(skip(self))]
    pub async fn fetch(&self, city: &str) -> Result<WeatherReading, ApplicationError> {
        let city = City::new(city)?;
        self.fetch_city(&city).await
    }

    /// Fetch the current reading for an already validated city
    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch_city(&self, city: &City) -> Result<WeatherReading, ApplicationError> {
        debug!("Fetching current weather");

        match self.weather.current_weather(city).await {
            Ok(reading) => {
                debug!(
                    resolved = %reading.city,
                    condition = %reading.condition,
                    "Weather lookup succeeded"
                );
                Ok(reading)
            },
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                Err(e)
            },
        }
    }
}
