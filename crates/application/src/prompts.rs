//! Prompt construction for weather narratives

use std::fmt::Write as _;

use domain::{WeatherReading, format_celsius};

/// System prompt for every narrative request
pub const WEATHER_SYSTEM_PROMPT: &str = "You are a friendly, knowledgeable weather assistant. \
Answer in plain conversational language, never as a list of raw measurements. \
Only use the weather data you are given; do not invent forecasts.";

/// Answer used by the chat endpoint when no city was named and the backend is unavailable
pub const NO_LOCATION_FALLBACK: &str = "I can tell you about the current weather anywhere in \
the world. Tell me which city you are interested in and I will look it up for you.";

/// Render the data block shared by both prompt kinds
fn weather_data_block(reading: &WeatherReading) -> String {
    let mut block = String::with_capacity(320);
    let _ = writeln!(block, "Current weather data for {}:", reading.location_label());
    let _ = writeln!(block, "- Conditions: {}", reading.condition);
    let _ = writeln!(
        block,
        "- Temperature: {}°C (feels like {}°C)",
        format_celsius(reading.temperature_c),
        format_celsius(reading.feels_like_c)
    );
    let _ = writeln!(
        block,
        "- Humidity: {} ({})",
        reading.humidity,
        reading.humidity.comfort()
    );
    let _ = writeln!(block, "- Pressure: {} hPa", reading.pressure_hpa);
    let _ = writeln!(block, "- Wind speed: {} m/s", reading.wind_speed_ms);
    let _ = writeln!(block, "- Visibility: {} km", reading.visibility_km);
    match reading.observed_at() {
        Some(at) => {
            let _ = writeln!(block, "- Observed at: {}", at.format("%Y-%m-%d %H:%M UTC"));
        },
        None => {
            let _ = writeln!(block, "- Observed at: unknown");
        },
    }
    block
}

/// Build the narrative prompt for a weather lookup
///
/// `context` is an optional user question that should shape the answer.
#[must_use]
pub fn weather_summary_prompt(reading: &WeatherReading, context: Option<&str>) -> String {
    let mut prompt = weather_data_block(reading);
    prompt.push_str(
        "\nPlease:\n\
         1. Summarize the current conditions in a friendly, conversational tone.\n\
         2. Explain what the feels-like temperature means for someone heading outside.\n\
         3. Suggest suitable activities or clothing for these conditions.\n\
         4. Point out anything notable, such as strong wind, poor visibility, \
         uncomfortable humidity or a large gap between actual and feels-like temperature.\n\
         Do not just repeat the numbers back. Keep it to one short paragraph.\n",
    );

    if let Some(question) = context.map(str::trim).filter(|q| !q.is_empty()) {
        let _ = write!(
            prompt,
            "\nThe user asked: \"{question}\"\nAnswer that question directly.\n"
        );
    }

    prompt
}

/// Build the prompt for a free-form chat question
///
/// Without a reading the model is asked to answer generally and invite the
/// user to name a city.
#[must_use]
pub fn chat_prompt(query: &str, reading: Option<&WeatherReading>) -> String {
    match reading {
        Some(reading) => weather_summary_prompt(reading, Some(query)),
        None => format!(
            "The user asked: \"{}\"\n\n\
             No location was given, so no live weather data is available. \
             Answer helpfully in general terms and ask which city they would like \
             current conditions for.\n",
            query.trim()
        ),
    }
}
