//! City lookup service
//!
//! Autocomplete lookup over the seeded city catalog: case-insensitive prefix
//! match on the name, optionally constrained to a country code.

use std::sync::Arc;

use domain::City;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::CityStore};

/// Fixed cap on returned records. Not configurable, no pagination.
pub const RESULT_LIMIT: usize = 10;

/// Service answering city autocomplete queries
pub struct CityLookupService {
    store: Arc<dyn CityStore>,
}

impl std::fmt::Debug for CityLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityLookupService")
            .field("store", &"<CityStore>")
            .finish()
    }
}

impl CityLookupService {
    /// Create a new lookup service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn CityStore>) -> Self {
        Self { store }
    }

    /// Find cities whose name starts with `name`, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is empty; the store is not
    /// queried in that case. Zero matches is a successful, empty result.
    #[instrument(skip(self))]
    pub async fn find_by_prefix(
        &self,
        name: &str,
        country: Option<&str>,
    ) -> Result<Vec<City>, ApplicationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("name", "Name required"));
        }

        let country = country.map(str::trim).filter(|c| !c.is_empty());

        let cities = self
            .store
            .find_by_prefix(name, country, RESULT_LIMIT)
            .await?;

        debug!(matches = cities.len(), "City lookup completed");
        Ok(cities)
    }
}
