//! OpenWeatherMap API response models
//!
//! Every key is optional on the wire. Required keys are checked in
//! [`CurrentWeatherResponse::into_reading`]; optional keys fall back to
//! their documented defaults there, once.

use domain::{Humidity, WeatherReading};
use serde::Deserialize;

/// Body of `GET /weather`
#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sys: Option<SysData>,
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
    #[serde(default)]
    pub main: Option<MainData>,
    #[serde(default)]
    pub wind: Option<WindData>,
    /// Visibility in meters
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Observation time, unix seconds
    #[serde(default)]
    pub dt: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeatherDescription {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainData {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<i64>,
    #[serde(default)]
    pub pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindData {
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Error body returned with non-2xx statuses, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl CurrentWeatherResponse {
    /// Convert into a normalized reading
    ///
    /// Returns the name of the first missing or invalid required field on
    /// failure.
    #[allow(clippy::cast_possible_truncation)]
    pub fn into_reading(self) -> Result<WeatherReading, String> {
        let city = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| "missing field `name`".to_string())?;

        let condition = self
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .ok_or_else(|| "missing field `weather[0].description`".to_string())?;

        let main = self
            .main
            .ok_or_else(|| "missing field `main`".to_string())?;
        let temperature_c = main
            .temp
            .ok_or_else(|| "missing field `main.temp`".to_string())?;
        let humidity = main
            .humidity
            .ok_or_else(|| "missing field `main.humidity`".to_string())
            .and_then(|h| Humidity::from_percent(h).map_err(|e| e.to_string()))?;

        Ok(WeatherReading {
            city,
            country: self.sys.and_then(|s| s.country).unwrap_or_default(),
            condition,
            temperature_c,
            feels_like_c: main.feels_like.unwrap_or(temperature_c),
            humidity,
            pressure_hpa: main.pressure.map_or(0, |p| p.round() as i64),
            wind_speed_ms: self.wind.and_then(|w| w.speed).unwrap_or(0.0),
            visibility_km: self.visibility.map_or(0.0, |m| (m / 1000.0).max(0.0)),
            observed_at_epoch: self.dt.unwrap_or(0),
        })
    }
}
