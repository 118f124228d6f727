//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod city_store;
mod weather_port;

pub use city_store::CityStore;
#[cfg(test)]
pub use city_store::MockCityStore;
pub use weather_port::WeatherPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
