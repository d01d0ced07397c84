//! Weather chat service - lookups and conversational questions
//!
//! Wires the weather service and the response composer together for the
//! two HTTP entry points.

use std::{fmt, sync::Arc};

use domain::{City, ComposedResponse, NarrativeOutcome};
use tracing::{info, instrument, warn};

use super::{ResponseComposer, WeatherService};
use crate::{
    error::ApplicationError,
    prompts::{NO_LOCATION_FALLBACK, chat_prompt},
};

/// Answer to a conversational weather question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    /// The trimmed question
    pub query: String,
    /// Generated answer or fallback text, never empty
    pub response: String,
    /// Resolved city name when a lookup was made
    pub city: Option<String>,
    /// True when `response` is fallback text
    pub is_fallback: bool,
}

/// Orchestrates weather lookups and narrative composition
pub struct WeatherChatService {
    weather: Arc<WeatherService>,
    composer: Arc<ResponseComposer>,
}

impl fmt::Debug for WeatherChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherChatService")
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

impl WeatherChatService {
    /// Create a new chat service
    pub fn new(weather: Arc<WeatherService>, composer: Arc<ResponseComposer>) -> Self {
        Self { weather, composer }
    }

    /// Access the composer, e.g. for readiness checks
    pub fn composer(&self) -> &ResponseComposer {
        &self.composer
    }

    /// Look up a city and narrate its current weather
    ///
    /// Fails only on validation or fetch errors; narrative failures fall
    /// back to the template.
    #[instrument(skip(self))]
    pub async fn report(&self, city: &str) -> Result<ComposedResponse, ApplicationError> {
        let reading = self.weather.fetch(city).await?;
        let composed = self.composer.compose(reading, None).await;

        info!(
            city = %composed.reading.city,
            fallback = composed.narrative_is_fallback,
            "Weather report composed"
        );
        Ok(composed)
    }

    /// Answer a free-form weather question, optionally about a city
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn ask(
        &self,
        query: &str,
        city: Option<&str>,
    ) -> Result<ChatAnswer, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Query must not be empty".to_string(),
            ));
        }

        let reading = match City::optional(city) {
            Some(city) => Some(self.weather.fetch_city(&city).await?),
            None => None,
        };

        let prompt = chat_prompt(query, reading.as_ref());
        let (response, is_fallback) = match self.composer.narrate(&prompt).await {
            NarrativeOutcome::Generated(text) => (text, false),
            NarrativeOutcome::Failed(reason) => {
                if self.composer.is_enabled() {
                    warn!(reason = %reason, "Chat generation failed, using fallback");
                }
                let text = reading.as_ref().map_or_else(
                    || NO_LOCATION_FALLBACK.to_string(),
                    domain::WeatherReading::fallback_narrative,
                );
                (text, true)
            },
        };

        Ok(ChatAnswer {
            query: query.to_string(),
            response,
            city: reading.map(|r| r.city),
            is_fallback,
        })
    }
}
