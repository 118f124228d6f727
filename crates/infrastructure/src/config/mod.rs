//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `weather`: upstream OpenWeatherMap settings

mod database;
mod server;
mod weather;

use secrecy::SecretString;
use serde::Deserialize;

pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use weather::WeatherConfig;

/// Environment variable holding the upstream API key credential
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Upstream weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `CITYWEATHER`-prefixed environment variables
    ///
    /// The upstream API key may also be supplied via `OPENWEATHER_API_KEY`,
    /// which only applies when the config itself carries no key.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CITYWEATHER_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("CITYWEATHER")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut loaded: Self = builder.build()?.try_deserialize()?;

        if loaded.weather.api_key.is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.is_empty() {
                    loaded.weather.api_key = Some(SecretString::from(key));
                }
            }
        }

        Ok(loaded)
    }
}
