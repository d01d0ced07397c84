//! Route definitions

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Request ids and the body size limit are applied here so every caller of
/// the router gets them; CORS and access logs are added by the binary.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_json_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API
        .route("/weather", get(handlers::weather::get_weather))
        .route("/weather/chat", post(handlers::chat::chat))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(crate::middleware::request_id))
        // Attach state
        .with_state(state)
}
