//! Application layer - Use cases and orchestration
//!
//! Validates requests, fetches weather through [`ports::WeatherPort`] and
//! turns readings into narratives through [`ports::InferencePort`].
//! Infrastructure adapters implement the ports.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
