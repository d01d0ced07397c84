//! Composed response and narrative outcome

use serde::Serialize;

use super::WeatherReading;

/// Result of asking the generative backend for a narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeOutcome {
    /// The backend produced text
    Generated(String),
    /// The backend failed, returned nothing usable, or was skipped
    Failed(String),
}

impl NarrativeOutcome {
    /// Treat blank completions as failures
    #[must_use]
    pub fn from_completion(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Failed("backend returned an empty completion".to_string())
        } else {
            Self::Generated(text)
        }
    }

    /// Whether text was generated
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// A weather reading plus the narrative shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedResponse {
    pub reading: WeatherReading,
    /// Never empty
    pub narrative: String,
    /// True when the template was used instead of generated text
    pub narrative_is_fallback: bool,
}

impl ComposedResponse {
    /// Resolve an outcome against a reading
    ///
    /// Generated text passes through verbatim; anything else falls back to
    /// the reading's template sentence.
    #[must_use]
    pub fn resolve(reading: WeatherReading, outcome: NarrativeOutcome) -> Self {
        match outcome {
            NarrativeOutcome::Generated(narrative) => Self {
                reading,
                narrative,
                narrative_is_fallback: false,
            },
            NarrativeOutcome::Failed(_) => {
                let narrative = reading.fallback_narrative();
                Self {
                    reading,
                    narrative,
                    narrative_is_fallback: true,
                }
            },
        }
    }
}
