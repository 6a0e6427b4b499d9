//! Roster API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use roster_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StorageBackend, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let app_state = match &config.storage {
        StorageBackend::Memory => {
            if config.migrate_only {
                return Err(AppError::Validation(
                    "migrate requires ROSTER_STORAGE=postgres".to_owned(),
                ));
            }

            info!("using in-memory storage");
            api_services::build_in_memory_app_state()
        }
        StorageBackend::Postgres(database) => {
            let pool = api_services::connect_and_migrate(database).await?;
            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            info!("using postgres storage");
            api_services::build_postgres_app_state(pool)
        }
    };

    let app = api_router::build_router(app_state, config.frontend_url.as_deref())?;
    let address = config.socket_address()?;
    info!(%address, "roster api listening");

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
