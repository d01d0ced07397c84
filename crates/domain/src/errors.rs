//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name was empty or whitespace only
    #[error("City name must not be empty")]
    EmptyCity,

    /// Humidity outside 0-100
    #[error("Invalid humidity: {0}")]
    InvalidHumidity(i64),
}
