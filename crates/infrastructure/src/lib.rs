//! Infrastructure layer for CityWeather
//!
//! Adapters implementing the application ports: configuration loading,
//! SQLite persistence for the city catalog, the one-shot seeder, and the
//! OpenWeatherMap adapter.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, DatabaseConfig, ServerConfig, WeatherConfig};
pub use persistence::{
    ConnectionPool, DatabaseError, SqliteCityStore, create_pool,
    seeder::{SeedOutcome, seed_if_empty},
};
