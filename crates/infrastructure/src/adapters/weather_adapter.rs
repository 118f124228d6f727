//! OpenWeatherMap adapter
//!
//! Bridges the HTTP client to the `WeatherPort`. Upstream failure details
//! are logged here and collapsed into an external-service error; the HTTP
//! layer turns that into an opaque response.

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use integration_weather::{OpenWeatherClient, WeatherApiConfig, WeatherError};
use serde_json::Value;
use tracing::warn;

/// Weather port implementation backed by OpenWeatherMap
#[derive(Debug)]
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl OpenWeatherAdapter {
    /// Create an adapter from the API configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(e: WeatherError) -> ApplicationError {
        warn!(error = %e, "Upstream weather request failed");
        ApplicationError::ExternalService(e.to_string())
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    async fn current_weather(&self, city_id: &str) -> Result<Value, ApplicationError> {
        self.client
            .current_weather(city_id)
            .await
            .map_err(Self::map_error)
    }

    async fn forecast<'a>(
        &self,
        city_id: &str,
        units: Option<&'a str>,
    ) -> Result<Value, ApplicationError> {
        self.client
            .forecast(city_id, units)
            .await
            .map_err(Self::map_error)
    }
}
