//! Normalized weather reading
//!
//! Produced from a successful provider response. Optional provider fields
//! have already been resolved to their defaults, so every field here is a
//! plain value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Humidity;

/// Current weather conditions for one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    /// Location name as resolved by the provider
    pub city: String,
    /// Country code (empty when the provider omits it)
    pub country: String,
    /// Short description, e.g. "light rain"
    pub condition: String,
    /// Air temperature in °C
    pub temperature_c: f64,
    /// Apparent temperature in °C
    pub feels_like_c: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Sea-level pressure in hPa (0 when absent)
    pub pressure_hpa: i64,
    /// Wind speed in m/s (0 when absent)
    pub wind_speed_ms: f64,
    /// Visibility in km (0 when absent)
    pub visibility_km: f64,
    /// Observation time as unix seconds (0 when absent)
    pub observed_at_epoch: i64,
}

impl WeatherReading {
    /// Deterministic one-sentence summary built only from structured fields
    ///
    /// Used whenever a generated narrative is unavailable.
    #[must_use]
    pub fn fallback_narrative(&self) -> String {
        format!(
            "Current weather in {}: {} with a temperature of {}°C. Humidity is {}%.",
            self.city,
            self.condition,
            format_celsius(self.temperature_c),
            self.humidity.value()
        )
    }

    /// Observation time, if the provider reported one
    #[must_use]
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        if self.observed_at_epoch == 0 {
            return None;
        }
        DateTime::from_timestamp(self.observed_at_epoch, 0)
    }

    /// Display name including the country when known
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

/// Render a temperature with at least one decimal place
///
/// Whole numbers keep a trailing `.0` (`15.0`); other values use the
/// shortest exact representation (`15.25`).
#[must_use]
pub fn format_celsius(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
