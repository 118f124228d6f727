//! CityWeather HTTP presentation layer
//!
//! Axum front door for the weather proxy and city autocomplete routes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
