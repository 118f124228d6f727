//! City catalog seeder
//!
//! One-shot, idempotent population of the city catalog from the bundled
//! dataset. An already-populated catalog is left untouched.

use application::{error::ApplicationError, ports::CityStore};
use domain::{City, CityId, Coordinates, CountryCode};
use serde::Deserialize;
use tracing::info;

/// Bundled city dataset
const CITY_DATASET: &str = include_str!("../../data/cities.json");

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: i64,
    name: String,
    country: String,
    coord: SeedCoord,
}

#[derive(Debug, Deserialize)]
struct SeedCoord {
    lon: f64,
    lat: f64,
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was empty and has been populated
    Seeded(usize),
    /// The catalog already held data and was left untouched
    AlreadySeeded,
}

/// Parse the bundled dataset into domain cities
///
/// # Errors
///
/// Returns an error if the dataset is malformed or a record fails
/// domain validation.
pub fn load_dataset() -> Result<Vec<City>, ApplicationError> {
    let records: Vec<SeedRecord> = serde_json::from_str(CITY_DATASET)
        .map_err(|e| ApplicationError::Internal(format!("invalid city dataset: {e}")))?;

    records
        .into_iter()
        .map(|record| {
            let id = CityId::new(record.id)?;
            let country = CountryCode::new(&record.country)?;
            let coord = Coordinates::new(record.coord.lon, record.coord.lat)?;
            Ok(City::new(id, record.name, country, coord)?)
        })
        .collect()
}

/// Seed the catalog when it is empty
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the store fails.
pub async fn seed_if_empty(store: &dyn CityStore) -> Result<SeedOutcome, ApplicationError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "City catalog already populated, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let cities = load_dataset()?;
    let inserted = store.insert_many(cities).await?;
    info!(inserted, "Seeded city catalog");

    Ok(SeedOutcome::Seeded(inserted))
}
