//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request input failed validation; no outbound call was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Weather provider failed
    ///
    /// `status` is the provider's HTTP status, absent for transport failures.
    #[error("Upstream error: {message}")]
    Upstream { status: Option<u16>, message: String },

    /// Weather provider answered successfully but the payload is unusable
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Generative backend failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidHumidity(_) => Self::MalformedResponse(err.to_string()),
            DomainError::EmptyCity => Self::InvalidInput(err.to_string()),
        }
    }
}
