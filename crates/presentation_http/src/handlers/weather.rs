//! Weather lookup handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::ComposedResponse;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for `GET /weather`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    /// City name as typed by the user
    pub city: Option<String>,
}

/// Body of a successful weather lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// Resolved city name
    pub city: String,
    pub country: String,
    /// Condition description
    pub weather: String,
    /// °C
    pub temperature: f64,
    /// Percent
    pub humidity: u8,
    /// °C
    pub feels_like: f64,
    /// hPa
    pub pressure: i64,
    /// m/s
    pub wind_speed: f64,
    /// km
    pub visibility: f64,
    /// Narrative shown to the user, never empty
    pub ai_response: String,
    /// True when `ai_response` is the template sentence
    pub ai_response_is_fallback: bool,
    /// Observation time, Unix seconds (0 when unknown)
    pub timestamp: i64,
}

impl From<ComposedResponse> for WeatherResponse {
    fn from(composed: ComposedResponse) -> Self {
        let reading = composed.reading;
        Self {
            city: reading.city,
            country: reading.country,
            weather: reading.condition,
            temperature: reading.temperature_c,
            humidity: reading.humidity.value(),
            feels_like: reading.feels_like_c,
            pressure: reading.pressure_hpa,
            wind_speed: reading.wind_speed_ms,
            visibility: reading.visibility_km,
            ai_response: composed.narrative,
            ai_response_is_fallback: composed.narrative_is_fallback,
            timestamp: reading.observed_at_epoch,
        }
    }
}

/// Current weather for a city, with a narrative
///
/// A missing `city` parameter is treated like an empty one.
#[instrument(skip_all)]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let city = query.city.unwrap_or_default();
    let composed = state.weather_chat.report(&city).await?;
    Ok(Json(composed.into()))
}
