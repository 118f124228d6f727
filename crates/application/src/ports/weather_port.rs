//! Weather provider port
//!
//! Defines the interface for the upstream weather API. The payload is relayed
//! verbatim as JSON, so the port deals in `serde_json::Value` rather than
//! typed weather models.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Port for the upstream weather API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current weather for a city id
    async fn current_weather(&self, city_id: &str) -> Result<Value, ApplicationError>;

    /// Fetch the forecast for a city id
    ///
    /// `units` is passed through to the upstream API; the adapter applies
    /// its configured default when `None`.
    async fn forecast<'a>(
        &self,
        city_id: &str,
        units: Option<&'a str>,
    ) -> Result<Value, ApplicationError>;
}
