use roster_core::AppError;
use roster_infrastructure::MIGRATOR;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::api_config::DatabaseConfig;

pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    Ok(pool)
}
