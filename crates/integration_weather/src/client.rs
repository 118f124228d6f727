//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap API. Responses are not modeled; the
//! payload is returned as raw `serde_json::Value` so callers can relay it
//! byte-for-byte.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

/// Weather client errors
///
/// Callers collapse all of these into one opaque failure; the variants exist
/// for server-side logging only.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete (DNS, transport, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The upstream API answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// The response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Weather API configuration
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// OpenWeatherMap API base URL
    pub base_url: String,

    /// API key credential; never logged or returned to clients
    pub api_key: SecretString,

    /// Connection timeout in seconds
    pub timeout_secs: u64,

    /// Units applied when the caller does not supply any
    pub default_units: String,
}

pub(crate) fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl WeatherApiConfig {
    /// Create a configuration with defaults for everything but the key
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: default_base_url(),
            api_key,
            timeout_secs: 30,
            default_units: "imperial".to_string(),
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the upstream URL for an endpoint and city id
    ///
    /// The key travels in the query string, so the full URL must never be
    /// logged.
    fn build_url(&self, endpoint: &str, city_id: &str, units: Option<&str>) -> String {
        let units = units.unwrap_or(&self.config.default_units);
        format!(
            "{}{}?id={}&APPID={}&units={}",
            self.config.base_url,
            endpoint,
            city_id,
            self.config.api_key.expose_secret(),
            units
        )
    }

    async fn fetch(
        &self,
        endpoint: &str,
        city_id: &str,
        units: Option<&str>,
    ) -> Result<Value, WeatherError> {
        let url = self.build_url(endpoint, city_id, units);
        debug!(endpoint, city_id, "Requesting upstream weather data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Fetch current weather for a city id
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city_id: &str) -> Result<Value, WeatherError> {
        self.fetch("/weather", city_id, None).await
    }

    /// Fetch the forecast for a city id
    ///
    /// `units` falls back to the configured default when `None`.
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        city_id: &str,
        units: Option<&str>,
    ) -> Result<Value, WeatherError> {
        self.fetch("/forecast", city_id, units).await
    }
}
