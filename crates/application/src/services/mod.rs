//! Application services

mod city_lookup_service;
mod weather_proxy_service;

pub use city_lookup_service::{CityLookupService, RESULT_LIMIT};
pub use weather_proxy_service::WeatherProxyService;
