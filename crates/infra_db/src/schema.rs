//! Schema migrations
//!
//! Migrations are embedded from the workspace `migrations/` directory and
//! applied at startup. Already-applied migrations are skipped.

use sqlx::migrate::Migrator;
use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies pending migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Applying database migrations");
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    info!("Database schema is up to date");
    Ok(())
}
