//! Humidity value object
//!
//! Relative humidity percentage as reported by the weather provider.

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Create a validated humidity value from a raw provider number
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHumidity` for values outside 0-100.
    pub fn from_percent(value: i64) -> Result<Self, DomainError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(DomainError::InvalidHumidity(value))
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Coarse comfort label used when describing conditions
    #[must_use]
    pub const fn comfort(self) -> &'static str {
        match self.0 {
            0..30 => "dry",
            30..=60 => "comfortable",
            _ => "humid",
        }
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Humidity::from_percent(0).unwrap().value(), 0);
        assert_eq!(Humidity::from_percent(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Humidity::from_percent(101),
            Err(DomainError::InvalidHumidity(101))
        ));
        assert!(matches!(
            Humidity::from_percent(-5),
            Err(DomainError::InvalidHumidity(-5))
        ));
    }

    #[test]
    fn display_has_percent_sign() {
        assert_eq!(Humidity::from_percent(60).unwrap().to_string(), "60%");
    }

    #[test]
    fn comfort_labels() {
        assert_eq!(Humidity::from_percent(12).unwrap().comfort(), "dry");
        assert_eq!(Humidity::from_percent(30).unwrap().comfort(), "comfortable");
        assert_eq!(Humidity::from_percent(60).unwrap().comfort(), "comfortable");
        assert_eq!(Humidity::from_percent(61).unwrap().comfort(), "humid");
    }

    #[test]
    fn serializes_as_number() {
        let h = Humidity::from_percent(65).unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "65");
    }
}
