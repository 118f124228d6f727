//! CityWeather catalog seeder
//!
//! One-shot command that populates the city catalog from the bundled
//! dataset and exits. Running it against an already-populated database is
//! a no-op.

use std::sync::Arc;

use infrastructure::{AppConfig, SeedOutcome, SqliteCityStore, create_pool, seed_if_empty};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cityweather_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(database = %config.database.path, "Seeding city catalog");

    let pool = Arc::new(create_pool(&config.database)?);
    let store = SqliteCityStore::new(pool);

    match seed_if_empty(&store)
        .await
        .map_err(|e| anyhow::anyhow!("Seeding failed: {e}"))?
    {
        SeedOutcome::Seeded(count) => info!(count, "Catalog seeded"),
        SeedOutcome::AlreadySeeded => info!("Catalog already populated, nothing to do"),
    }

    Ok(())
}
