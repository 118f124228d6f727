//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather proxy
        .route("/weather", get(handlers::weather::default_city_weather))
        .route("/current-weather", get(handlers::weather::current_weather))
        .route("/forecast", get(handlers::weather::forecast))
        // City autocomplete
        .route("/cities", get(handlers::cities::search_cities))
        // Attach state
        .with_state(state)
}
