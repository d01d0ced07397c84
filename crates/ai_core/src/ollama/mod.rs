//! Ollama inference engine implementation
//!
//! Talks to the `/api/chat` endpoint of an Ollama-compatible server.

mod client;

pub use client::OllamaInferenceEngine;
