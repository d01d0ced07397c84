//! Domain entities

mod composed_response;
mod weather_reading;

pub use composed_response::{ComposedResponse, NarrativeOutcome};
pub use weather_reading::{WeatherReading, format_celsius};
