//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{City, DomainError, Humidity, WeatherReading, format_celsius};
use proptest::prelude::*;

// ============================================================================
// City Property Tests
// ============================================================================

mod city_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(input in "[ \t\r\n]{0,20}") {
            prop_assert!(matches!(City::new(&input), Err(DomainError::EmptyCity)));
        }

        #[test]
        fn valid_names_are_trimmed(
            name in "[A-Za-z][A-Za-z .'-]{0,40}[A-Za-z]",
            left in "[ \t]{0,4}",
            right in "[ \t]{0,4}"
        ) {
            let city = City::new(format!("{left}{name}{right}")).unwrap();
            prop_assert_eq!(city.as_str(), name.as_str());
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn in_range_accepted(value in 0i64..=100) {
            let h = Humidity::from_percent(value).unwrap();
            prop_assert_eq!(i64::from(h.value()), value);
        }

        #[test]
        fn out_of_range_rejected(
            value in prop_oneof![(i64::MIN..0i64), (101i64..i64::MAX)]
        ) {
            prop_assert!(Humidity::from_percent(value).is_err());
        }
    }
}

// ============================================================================
// Fallback Narrative Property Tests
// ============================================================================

mod fallback_tests {
    use super::*;

    fn reading(condition: String, temperature_c: f64, humidity: u8) -> WeatherReading {
        WeatherReading {
            city: "Springfield".to_string(),
            country: "US".to_string(),
            condition,
            temperature_c,
            feels_like_c: temperature_c,
            humidity: Humidity::from_percent(i64::from(humidity)).unwrap(),
            pressure_hpa: 1013,
            wind_speed_ms: 0.0,
            visibility_km: 0.0,
            observed_at_epoch: 0,
        }
    }

    proptest! {
        #[test]
        fn fallback_contains_fields(
            condition in "[a-z]{1,12}( [a-z]{1,12})?",
            temp in -60.0f64..60.0,
            humidity in 0u8..=100
        ) {
            let r = reading(condition.clone(), temp, humidity);
            let narrative = r.fallback_narrative();
            prop_assert!(!narrative.is_empty());
            prop_assert!(narrative.contains(&condition));
            prop_assert!(narrative.contains(&format_celsius(temp)));
            let humidity_text = format!("{humidity}%");
            prop_assert!(narrative.contains(&humidity_text));
        }

        #[test]
        fn fallback_is_deterministic(temp in -60.0f64..60.0, humidity in 0u8..=100) {
            let r = reading("mist".to_string(), temp, humidity);
            prop_assert_eq!(r.fallback_narrative(), r.clone().fallback_narrative());
        }

        #[test]
        fn whole_temperatures_keep_one_decimal(temp in -60i32..60) {
            prop_assert_eq!(format_celsius(f64::from(temp)), format!("{temp}.0"));
        }
    }
}
