//! Geographic coordinates value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A longitude/latitude pair
///
/// Serializes as `{"lon": ..., "lat": ...}` to match the seeded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees (-180 to 180)
    lon: f64,
    /// Latitude in degrees (-90 to 90)
    lat: f64,
}

impl Coordinates {
    /// Create coordinates with range validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is out of
    /// range.
    pub fn new(lon: f64, lat: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self { lon, lat })
    }

    /// Get the longitude
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lon, self.lat)
    }
}
