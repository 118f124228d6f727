//! Upstream weather API configuration

use integration_weather::WeatherApiConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// Settings for the upstream OpenWeatherMap API
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key credential; required to serve weather routes
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Units applied when the request does not specify any
    #[serde(default = "default_units")]
    pub default_units: String,

    /// City id used by the fixed-city route
    #[serde(default = "default_city_id")]
    pub default_city_id: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_units() -> String {
    "imperial".to_string()
}

fn default_city_id() -> String {
    "4463523".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            default_units: default_units(),
            default_city_id: default_city_id(),
        }
    }
}

impl WeatherConfig {
    /// Convert into the client configuration
    ///
    /// # Errors
    ///
    /// Returns an error when no API key is configured.
    pub fn to_api_config(&self) -> Result<WeatherApiConfig, config::ConfigError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            config::ConfigError::Message(
                "weather API key missing; set OPENWEATHER_API_KEY".to_string(),
            )
        })?;

        Ok(WeatherApiConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
            default_units: self.default_units.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.default_units, "imperial");
        assert_eq!(config.default_city_id, "4463523");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn to_api_config_requires_key() {
        let config = WeatherConfig::default();
        assert!(config.to_api_config().is_err());
    }

    #[test]
    fn to_api_config_carries_settings_over() {
        let config = WeatherConfig {
            api_key: Some(SecretString::from("k")),
            default_units: "metric".to_string(),
            ..WeatherConfig::default()
        };
        let api_config = config.to_api_config().unwrap();
        assert_eq!(api_config.default_units, "metric");
        assert_eq!(api_config.timeout_secs, 30);
    }
}
