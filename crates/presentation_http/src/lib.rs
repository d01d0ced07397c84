//! WeatherChat HTTP presentation layer
//!
//! This crate provides the HTTP API for WeatherChat.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, ValidatedJson};
pub use routes::create_router;
pub use state::AppState;
