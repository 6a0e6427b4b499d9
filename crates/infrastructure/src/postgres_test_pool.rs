use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::MIGRATOR;

/// Connects to `DATABASE_URL` and applies the schema, or returns `None` so
/// Postgres-backed tests are skipped when no database is configured.
pub(crate) async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres repository tests: {error}");
    }

    Some(pool)
}
