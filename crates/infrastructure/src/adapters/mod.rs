//! Adapters implementing application ports

mod ollama_inference_adapter;
mod weather_adapter;

pub use ollama_inference_adapter::OllamaInferenceAdapter;
pub use weather_adapter::WeatherAdapter;
