//! City value object
//!
//! A city name as typed by the user, trimmed and validated before it is
//! sent to the weather provider.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::City;
//!
//! let city = City::new("  London ").expect("valid city");
//! assert_eq!(city.as_str(), "London");
//!
//! assert!(City::new("   ").is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// A trimmed, non-empty city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Create a validated city name
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCity` if nothing remains after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCity);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Parse an optional city, treating blank input as absent
    #[must_use]
    pub fn optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|name| Self::new(name).ok())
    }

    /// Get the city name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for City {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let city = City::new("\t Paris \n").unwrap();
        assert_eq!(city.as_str(), "Paris");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(City::new(""), Err(DomainError::EmptyCity)));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(City::new("  \t\n "), Err(DomainError::EmptyCity)));
    }

    #[test]
    fn keeps_inner_spaces() {
        let city = City::new(" New York ").unwrap();
        assert_eq!(city.as_str(), "New York");
    }

    #[test]
    fn long_names_are_left_to_the_provider() {
        let name = format!("  {}  ", "ü".repeat(150));
        let city = City::new(&name).unwrap();
        assert_eq!(city.as_str().chars().count(), 150);
    }

    #[test]
    fn optional_blank_is_none() {
        assert!(City::optional(None).is_none());
        assert!(City::optional(Some("   ")).is_none());
    }

    #[test]
    fn optional_present() {
        let city = City::optional(Some(" Oslo"));
        assert_eq!(city.map(City::into_inner), Some("Oslo".to_string()));
    }

    #[test]
    fn display_and_serialize() {
        let city = City::new("Tokyo").unwrap();
        assert_eq!(city.to_string(), "Tokyo");
        assert_eq!(serde_json::to_string(&city).unwrap(), "\"Tokyo\"");
    }
}
