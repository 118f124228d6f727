//! Weather proxy service
//!
//! Forwards weather queries to the upstream API and relays the JSON payload
//! untouched. All upstream problems surface as one opaque failure; callers
//! cannot distinguish a bad city id from a downed upstream.

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::{error::ApplicationError, ports::WeatherPort};

/// Service proxying current-weather and forecast queries
pub struct WeatherProxyService {
    provider: Arc<dyn WeatherPort>,
    default_city_id: String,
}

impl std::fmt::Debug for WeatherProxyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProxyService")
            .field("provider", &"<WeatherPort>")
            .field("default_city_id", &self.default_city_id)
            .finish()
    }
}

impl WeatherProxyService {
    /// Create a new proxy service
    ///
    /// `default_city_id` backs the legacy fixed-city route.
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherPort>, default_city_id: impl Into<String>) -> Self {
        Self {
            provider,
            default_city_id: default_city_id.into(),
        }
    }

    /// Current weather for the configured default city
    #[instrument(skip(self))]
    pub async fn current_weather_default(&self) -> Result<Value, ApplicationError> {
        self.provider.current_weather(&self.default_city_id).await
    }

    /// Current weather for the given city id
    ///
    /// # Errors
    ///
    /// Returns a validation error when `city_id` is empty; no upstream call
    /// is attempted in that case.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city_id: &str) -> Result<Value, ApplicationError> {
        let city_id = Self::require_city_id(city_id)?;
        self.provider.current_weather(city_id).await
    }

    /// Forecast for the given city id
    ///
    /// `units` is relayed to the upstream API when present; otherwise the
    /// provider's configured default applies.
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        city_id: &str,
        units: Option<&str>,
    ) -> Result<Value, ApplicationError> {
        let city_id = Self::require_city_id(city_id)?;
        let units = units.map(str::trim).filter(|u| !u.is_empty());
        self.provider.forecast(city_id, units).await
    }

    fn require_city_id(city_id: &str) -> Result<&str, ApplicationError> {
        let city_id = city_id.trim();
        if city_id.is_empty() {
            return Err(ApplicationError::validation("cityId", "cityId required"));
        }
        Ok(city_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ports::MockWeatherPort;

    #[tokio::test]
    async fn missing_city_id_is_rejected_without_upstream_call() {
        let mut provider = MockWeatherPort::new();
        provider.expect_current_weather().never();
        provider.expect_forecast().never();

        let service = WeatherProxyService::new(Arc::new(provider), "4463523");

        let result = service.current_weather("").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Validation { field: "cityId", .. })
        ));

        let result = service.forecast("   ", Some("imperial")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn relays_upstream_payload_untouched() {
        let mut provider = MockWeatherPort::new();
        provider
            .expect_forecast()
            .withf(|city_id, units| city_id == "4463523" && *units == Some("imperial"))
            .times(1)
            .returning(|_, _| Ok(json!({"temp": 72})));

        let service = WeatherProxyService::new(Arc::new(provider), "4463523");
        let payload = service.forecast("4463523", Some("imperial")).await.unwrap();

        assert_eq!(payload, json!({"temp": 72}));
    }

    #[tokio::test]
    async fn blank_units_are_dropped() {
        let mut provider = MockWeatherPort::new();
        provider
            .expect_forecast()
            .withf(|city_id, units| city_id == "42" && units.is_none())
            .times(1)
            .returning(|_, _| Ok(json!({})));

        let service = WeatherProxyService::new(Arc::new(provider), "4463523");
        service.forecast("42", Some("")).await.unwrap();
    }

    #[tokio::test]
    async fn default_route_uses_configured_city_id() {
        let mut provider = MockWeatherPort::new();
        provider
            .expect_current_weather()
            .withf(|city_id| city_id == "4463523")
            .times(1)
            .returning(|_| Ok(json!({"name": "Denver"})));

        let service = WeatherProxyService::new(Arc::new(provider), "4463523");
        let payload = service.current_weather_default().await.unwrap();

        assert_eq!(payload["name"], "Denver");
    }

    #[tokio::test]
    async fn upstream_failures_propagate_opaquely() {
        let mut provider = MockWeatherPort::new();
        provider
            .expect_current_weather()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 502".to_string())));

        let service = WeatherProxyService::new(Arc::new(provider), "4463523");
        let result = service.current_weather("4463523").await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
