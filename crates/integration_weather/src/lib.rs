//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Fetches current conditions and forecasts by numeric city id and relays
//! the JSON payload verbatim. Requires an API key.

pub mod client;

pub use client::{OpenWeatherClient, WeatherApiConfig, WeatherError};
