//! Application state shared across handlers

use std::sync::Arc;

use application::{CityLookupService, WeatherProxyService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// City autocomplete service
    pub city_lookup: Arc<CityLookupService>,
    /// Weather proxy service
    pub weather: Arc<WeatherProxyService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
