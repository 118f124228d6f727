//! City entity
//!
//! A seeded, read-mostly record identifying a place by its external numeric
//! id, name, country code, and coordinates. The catalog is populated once
//! from a fixed dataset and never mutated afterward.

use serde::Serialize;

use crate::{
    errors::DomainError,
    value_objects::{CityId, Coordinates, CountryCode},
};

/// A city from the seeded catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    /// External identifier, unique across the catalog
    id: CityId,
    /// City name
    name: String,
    /// ISO country code
    country: CountryCode,
    /// Geographic position
    coord: Coordinates,
}

impl City {
    /// Create a city with validation
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the name is empty.
    pub fn new(
        id: CityId,
        name: impl Into<String>,
        country: CountryCode,
        coord: Coordinates,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "city name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            country,
            coord,
        })
    }

    /// Get the external id
    #[must_use]
    pub const fn id(&self) -> CityId {
        self.id
    }

    /// Get the city name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the country code
    #[must_use]
    pub const fn country(&self) -> CountryCode {
        self.country
    }

    /// Get the coordinates
    #[must_use]
    pub const fn coord(&self) -> Coordinates {
        self.coord
    }
}
