//! Domain layer for WeatherChat
//!
//! Contains the weather reading entity, the composed response returned to
//! chat clients, validated value objects and domain errors.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
