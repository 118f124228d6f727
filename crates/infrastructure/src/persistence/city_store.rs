//! SQLite-backed city store
//!
//! Implements the `CityStore` port. All queries run on the blocking thread
//! pool since rusqlite is synchronous.

use std::sync::Arc;

use application::{error::ApplicationError, ports::CityStore};
use async_trait::async_trait;
use domain::{City, CityId, Coordinates, CountryCode};
use rusqlite::{Row, params};
use tracing::instrument;

use super::connection::ConnectionPool;

/// City store backed by SQLite
#[derive(Debug, Clone)]
pub struct SqliteCityStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteCityStore {
    /// Create a new store over a connection pool
    #[must_use]
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn row_to_city(row: &Row<'_>) -> rusqlite::Result<City> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let country: String = row.get(2)?;
    let lon: f64 = row.get(3)?;
    let lat: f64 = row.get(4)?;

    let invalid = |idx: usize, e: domain::DomainError| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())),
        )
    };

    let id = CityId::new(id).map_err(|e| invalid(0, e))?;
    let country = CountryCode::new(&country).map_err(|e| invalid(2, e))?;
    let coord = Coordinates::new(lon, lat).map_err(|e| invalid(3, e))?;

    City::new(id, name, country, coord).map_err(|e| invalid(1, e))
}

/// Escape LIKE wildcards so the prefix matches literally
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn storage_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Storage(e.to_string())
}

#[async_trait]
impl CityStore for SqliteCityStore {
    /// Prefix match via `LIKE 'prefix%'`. SQLite folds case for ASCII
    /// letters only, so non-ASCII names match case-sensitively.
    #[instrument(skip(self))]
    async fn find_by_prefix<'a>(
        &self,
        prefix: &str,
        country: Option<&'a str>,
        limit: usize,
    ) -> Result<Vec<City>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let pattern = format!("{}%", escape_like(prefix));
        let country = country.map(str::to_uppercase);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        tokio::task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            let cities = match country {
                Some(country) => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, country, lon, lat FROM cities
                             WHERE name LIKE ?1 ESCAPE '\\' AND country = ?2
                             ORDER BY rowid LIMIT ?3",
                        )
                        .map_err(storage_error)?;
                    stmt.query_map(params![pattern, country, limit], row_to_city)
                        .map_err(storage_error)?
                        .collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(storage_error)?
                }
                None => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, country, lon, lat FROM cities
                             WHERE name LIKE ?1 ESCAPE '\\'
                             ORDER BY rowid LIMIT ?2",
                        )
                        .map_err(storage_error)?;
                    stmt.query_map(params![pattern, limit], row_to_city)
                        .map_err(storage_error)?
                        .collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(storage_error)?
                }
            };

            Ok(cities)
        })
        .await
        .map_err(storage_error)?
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        tokio::task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM cities", [], |row| row.get(0))
                .map_err(storage_error)?;
            Ok(u64::try_from(count).unwrap_or(0))
        })
        .await
        .map_err(storage_error)?
    }

    #[instrument(skip(self, cities))]
    async fn insert_many(&self, cities: Vec<City>) -> Result<usize, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(storage_error)?;
            let tx = conn.transaction().map_err(storage_error)?;

            let inserted = {
                let mut stmt = tx
                    .prepare(
                        "INSERT OR IGNORE INTO cities (id, name, country, lon, lat)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                    )
                    .map_err(storage_error)?;

                let mut inserted = 0usize;
                for city in &cities {
                    inserted += stmt
                        .execute(params![
                            city.id().value(),
                            city.name(),
                            city.country().as_str(),
                            city.coord().lon(),
                            city.coord().lat(),
                        ])
                        .map_err(storage_error)?;
                }
                inserted
            };

            tx.commit().map_err(storage_error)?;
            Ok(inserted)
        })
        .await
        .map_err(storage_error)?
    }
}
