//! Request ID middleware for HTTP request correlation
//!
//! Reuses a client-supplied UUID from `X-Request-Id` or mints a v7 one and
//! echoes it on the response. The rest of the request runs inside a span
//! carrying the id.

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID attached to every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestId(Uuid);

impl RequestId {
    /// Take the id from the request headers, or generate one
    fn from_request(request: &Request) -> Self {
        let id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .unwrap_or_else(Uuid::now_v7);
        Self(id)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware function; install with `axum::middleware::from_fn(request_id)`
pub async fn request_id(request: Request, next: Next) -> Response {
    let id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "http_request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
