//! City autocomplete handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::City;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the city search route
#[derive(Debug, Deserialize)]
pub struct CitySearchParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// GET /cities?name=...&country=...
///
/// Prefix autocomplete over the seeded catalog. Zero matches is a
/// successful empty array, never an error.
pub async fn search_cities(
    State(state): State<AppState>,
    Query(params): Query<CitySearchParams>,
) -> Result<Json<Vec<City>>, ApiError> {
    let name = params.name.as_deref().unwrap_or("");
    let cities = state
        .city_lookup
        .find_by_prefix(name, params.country.as_deref())
        .await?;
    Ok(Json(cities))
}
