//! Database connection management
//!
//! Pooled SQLite connections via r2d2. File-backed databases run in WAL
//! mode; in-memory databases are used by the test suites.

use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

use super::migrations;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection pool error
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error while preparing the database file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connection pool type alias
pub type ConnectionPool = r2d2::Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Create a connection pool and run migrations when configured
///
/// # Errors
///
/// Returns an error if the pool cannot be created or migrations fail.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    let manager = if config.is_in_memory() {
        info!("Opening in-memory database");
        SqliteConnectionManager::memory()
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        info!(path = %config.path, "Opening database");
        SqliteConnectionManager::file(&config.path).with_init(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA foreign_keys = ON;",
            )
        })
    };

    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        migrations::run(&conn)?;
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_is_migrated() {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        let conn = pool.get().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'cities'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn file_backed_pool_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cities.db");
        let config = DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
            max_connections: 2,
            run_migrations: true,
        };

        let pool = create_pool(&config).unwrap();
        assert!(pool.get().is_ok());
        assert!(path.exists());
    }

    #[test]
    fn migrations_can_be_skipped() {
        let config = DatabaseConfig {
            run_migrations: false,
            ..DatabaseConfig::in_memory()
        };
        let pool = create_pool(&config).unwrap();
        let conn = pool.get().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'cities'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 0);
    }
}
