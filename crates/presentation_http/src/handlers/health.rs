//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub inference: InferenceStatus,
}

/// Status of the generative backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceStatus {
    /// False when narrative generation is switched off
    pub enabled: bool,
    pub healthy: bool,
    pub model: Option<String>,
}

/// Readiness check
///
/// With generation enabled the server is ready only when the backend
/// answers; with it disabled every narrative is the template, so the
/// backend is not consulted.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let composer = state.weather_chat.composer();
    let enabled = composer.is_enabled();
    let healthy = composer.is_backend_healthy().await;
    let model = healthy.then(|| composer.model());

    let ready = healthy || !enabled;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            inference: InferenceStatus {
                enabled,
                healthy,
                model,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_version() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: false,
            inference: InferenceStatus {
                enabled: true,
                healthy: false,
                model: None,
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ready"], false);
        assert_eq!(json["inference"]["healthy"], false);
        assert!(json["inference"]["model"].is_null());
    }
}
