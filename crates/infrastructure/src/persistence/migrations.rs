//! Schema migrations
//!
//! Versioned, forward-only migrations tracked in a `schema_version` table.

use rusqlite::Connection;

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i64 = 1;

/// Run pending migrations
///
/// # Errors
///
/// Returns an error if a migration statement fails.
pub fn run(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    if current < SCHEMA_VERSION {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [SCHEMA_VERSION],
        )?;
    }

    Ok(())
}

fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS cities (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country TEXT NOT NULL,
            lon REAL NOT NULL,
            lat REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_cities_name ON cities(name COLLATE NOCASE);",
    )?;
    Ok(())
}
