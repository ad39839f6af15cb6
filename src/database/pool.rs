use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config;

/// Errors from pool construction and schema migration
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Connect to the database named by DATABASE_URL, using pool settings
/// from the application config.
pub async fn connect() -> Result<PgPool, DatabaseError> {
    let url = database_url()?;
    let db = &config::config().database;

    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(Duration::from_secs(db.connection_timeout_secs))
        .connect(&url)
        .await?;

    info!("Connected to database pool (max_connections={})", db.max_connections);
    Ok(pool)
}

/// Apply the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn database_url() -> Result<String, DatabaseError> {
    std::env::var("DATABASE_URL").map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))
}
