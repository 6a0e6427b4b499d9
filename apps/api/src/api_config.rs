use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use roster_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres(DatabaseConfig),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub storage: StorageBackend,
    pub frontend_url: Option<String>,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let storage = match env::var("ROSTER_STORAGE")
            .unwrap_or_else(|_| "memory".to_owned())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StorageBackend::Memory,
            "postgres" => {
                let max_connections = optional_env("DATABASE_MAX_CONNECTIONS")
                    .map(|value| {
                        value.parse::<u32>().map_err(|error| {
                            AppError::Validation(format!(
                                "invalid DATABASE_MAX_CONNECTIONS: {error}"
                            ))
                        })
                    })
                    .transpose()?
                    .unwrap_or(10);

                StorageBackend::Postgres(DatabaseConfig {
                    database_url: required_non_empty_env("DATABASE_URL")?,
                    max_connections,
                })
            }
            other => {
                return Err(AppError::Validation(format!(
                    "ROSTER_STORAGE must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        let frontend_url = optional_env("FRONTEND_URL");
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        Ok(Self {
            migrate_only,
            storage,
            frontend_url,
            api_host,
            api_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    fn config(api_host: &str) -> ApiConfig {
        ApiConfig {
            migrate_only: false,
            storage: super::StorageBackend::Memory,
            frontend_url: None,
            api_host: api_host.to_owned(),
            api_port: 3001,
        }
    }

    #[test]
    fn socket_address_combines_host_and_port() {
        let address = config("127.0.0.1")
            .socket_address()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(address.to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        assert!(config("localhost").socket_address().is_err());
    }
}
