//! Weather proxy handlers
//!
//! The upstream JSON payload is relayed to the client untouched. Query
//! parameters arrive as plain strings; the only validation is a presence
//! check on the city id.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the current-weather route
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherParams {
    #[serde(default)]
    pub city_id: Option<String>,
}

/// Query parameters for the forecast route
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
}

/// GET /weather
///
/// Current weather for the configured default city.
pub async fn default_city_weather(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let payload = state.weather.current_weather_default().await?;
    Ok(Json(payload))
}

/// GET /current-weather?cityId=...
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<CurrentWeatherParams>,
) -> Result<Json<Value>, ApiError> {
    let city_id = params.city_id.as_deref().unwrap_or("");
    let payload = state.weather.current_weather(city_id).await?;
    Ok(Json(payload))
}

/// GET /forecast?cityId=...&units=...
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Value>, ApiError> {
    let city_id = params.city_id.as_deref().unwrap_or("");
    let payload = state
        .weather
        .forecast(city_id, params.units.as_deref())
        .await?;
    Ok(Json(payload))
}
