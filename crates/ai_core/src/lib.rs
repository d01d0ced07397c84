//! AI Core - Generative text engine
//!
//! Provides the prompt-in/text-out abstraction used to turn weather readings
//! into conversational narratives, and an implementation that talks to any
//! Ollama-compatible chat server.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};
