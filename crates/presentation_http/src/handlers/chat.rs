//! Conversational weather handler

use application::ChatAnswer;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /weather/chat`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    /// The user's question
    #[validate(length(min = 1, max = 2000, message = "must be between 1 and 2000 characters"))]
    pub query: String,

    /// Optional city to look up first; blank means none
    #[serde(default)]
    pub city: Option<String>,
}

/// Answer body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub query: String,
    pub response: String,
    /// Resolved city name when a lookup was made
    pub city: Option<String>,
    /// True when `response` is fallback text
    pub is_fallback: bool,
}

impl From<ChatAnswer> for ChatResponse {
    fn from(answer: ChatAnswer) -> Self {
        Self {
            query: answer.query,
            response: answer.response,
            city: answer.city,
            is_fallback: answer.is_fallback,
        }
    }
}

/// Answer a weather question
#[instrument(skip_all)]
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let answer = state
        .weather_chat
        .ask(&request.query, request.city.as_deref())
        .await?;
    Ok(Json(answer.into()))
}
