//! City identifier value object
//!
//! External numeric identifier matching the upstream weather API's city ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Numeric identifier of a city, as assigned by the upstream weather API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(i64);

impl CityId {
    /// Create a city id from a raw value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityId` if the value is not positive.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidCityId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse a city id from its string form
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidCityId(s.to_string()))
            .and_then(Self::new)
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive() {
        let id = CityId::new(4_463_523).unwrap();
        assert_eq!(id.value(), 4_463_523);
    }

    #[test]
    fn new_rejects_zero_and_negative() {
        assert!(CityId::new(0).is_err());
        assert!(CityId::new(-5).is_err());
    }

    #[test]
    fn parse_valid() {
        let id = CityId::parse("4463523").unwrap();
        assert_eq!(id.value(), 4_463_523);
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = CityId::parse(" 42 ").unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(CityId::parse("denver").is_err());
        assert!(CityId::parse("").is_err());
    }

    #[test]
    fn display_round_trips() {
        let id = CityId::new(5_419_384).unwrap();
        assert_eq!(id.to_string(), "5419384");
    }

    #[test]
    fn serde_is_transparent() {
        let id = CityId::new(123).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "123");
        let back: CityId = serde_json::from_str("123").unwrap();
        assert_eq!(back, id);
    }
}
