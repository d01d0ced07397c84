//! API error handling
//!
//! Every error leaves the server as `{error, code}` JSON.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Weather provider answered with an error status, passed through as is
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    /// Weather provider unreachable or its payload unusable
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Upstream { status, .. } => (*status, "upstream_error"),
            Self::BadGateway(_) => (StatusCode::BAD_GATEWAY, "bad_gateway"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            Self::BadRequest(msg)
            | Self::Upstream { message: msg, .. }
            | Self::BadGateway(msg) => msg,
            Self::Internal(msg) => {
                // Internal details stay in the logs
                error!(error = %msg, "Internal server error");
                "An internal error occurred".to_string()
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::Upstream {
                status: Some(status),
                message,
            } => match StatusCode::from_u16(status) {
                Ok(status) => Self::Upstream { status, message },
                Err(_) => Self::BadGateway(message),
            },
            ApplicationError::Upstream {
                status: None,
                message,
            } => Self::BadGateway(message),
            ApplicationError::MalformedResponse(msg) => {
                Self::BadGateway(format!("Malformed response from weather provider: {msg}"))
            },
            // The weather endpoints fall back instead of surfacing these
            ApplicationError::Inference(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn upstream_keeps_provider_status() {
        let err: ApiError = ApplicationError::Upstream {
            status: Some(404),
            message: "city not found".to_string(),
        }
        .into();

        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "upstream_error"));
        assert!(matches!(
            err,
            ApiError::Upstream { ref message, .. } if message == "city not found"
        ));
    }

    #[test]
    fn transport_failure_is_bad_gateway() {
        let err: ApiError = ApplicationError::Upstream {
            status: None,
            message: "Request timed out after 10s".to_string(),
        }
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn invalid_upstream_status_is_bad_gateway() {
        let err: ApiError = ApplicationError::Upstream {
            status: Some(42),
            message: "odd".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::BadGateway(_)));
    }

    #[test]
    fn malformed_response_is_bad_gateway() {
        let err: ApiError = ApplicationError::MalformedResponse("missing name".to_string()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_GATEWAY, "bad_gateway"));
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let err: ApiError = ApplicationError::InvalidInput("empty".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn configuration_is_internal() {
        let err: ApiError = ApplicationError::Configuration("no key".to_string()).into();
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        );
    }

    #[test]
    fn inference_failure_is_internal() {
        let err: ApiError = ApplicationError::Inference("backend down".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn internal_response_hides_details() {
        let response = ApiError::Internal("db password wrong".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "city not found".to_string(),
            code: "upstream_error".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "city not found", "code": "upstream_error"})
        );
    }
}
