//! Response composer - turns weather readings into narratives
//!
//! Every compose call yields a non-empty narrative. Generated text is
//! preferred; any backend failure falls back to the reading's template.

use std::{fmt, sync::Arc};

use domain::{ComposedResponse, NarrativeOutcome, WeatherReading};
use tracing::{debug, instrument, warn};

use crate::{
    ports::InferencePort,
    prompts::{WEATHER_SYSTEM_PROMPT, weather_summary_prompt},
};

/// Composes narratives with an optional generative backend
pub struct ResponseComposer {
    inference: Arc<dyn InferencePort>,
    enabled: bool,
}

impl fmt::Debug for ResponseComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseComposer")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl ResponseComposer {
    /// Create a composer that uses the backend
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference,
            enabled: true,
        }
    }

    /// Turn generation on or off; when off every narrative is the template
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether the backend is consulted
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Name of the backend model
    pub fn model(&self) -> String {
        self.inference.current_model()
    }

    /// Whether the backend is reachable
    pub async fn is_backend_healthy(&self) -> bool {
        self.enabled && self.inference.is_healthy().await
    }

    /// Ask the backend once for a narrative
    ///
    /// Errors and blank completions come back as [`NarrativeOutcome::Failed`].
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn narrate(&self, prompt: &str) -> NarrativeOutcome {
        if !self.enabled {
            return NarrativeOutcome::Failed("narrative generation disabled".to_string());
        }

        match self
            .inference
            .generate_with_system(WEATHER_SYSTEM_PROMPT, prompt)
            .await
        {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Narrative generated"
                );
                NarrativeOutcome::from_completion(result.content)
            },
            Err(e) => NarrativeOutcome::Failed(e.to_string()),
        }
    }

    /// Compose the narrative for a reading
    ///
    /// Calls the backend at most once and never fails.
    #[instrument(skip(self, reading, context), fields(city = %reading.city))]
    pub async fn compose(
        &self,
        reading: WeatherReading,
        context: Option<&str>,
    ) -> ComposedResponse {
        let prompt = weather_summary_prompt(&reading, context);
        let outcome = self.narrate(&prompt).await;

        if let NarrativeOutcome::Failed(reason) = &outcome {
            if self.enabled {
                warn!(reason = %reason, "Narrative generation failed, using template");
            } else {
                debug!("Narrative generation disabled, using template");
            }
        }

        ComposedResponse::resolve(reading, outcome)
    }
}
