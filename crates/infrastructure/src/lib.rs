//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_compensation_repository;
mod in_memory_employee_repository;
mod postgres_compensation_repository;
mod postgres_employee_repository;

#[cfg(test)]
mod postgres_test_pool;

pub use in_memory_compensation_repository::InMemoryCompensationRepository;
pub use in_memory_employee_repository::InMemoryEmployeeRepository;
pub use postgres_compensation_repository::PostgresCompensationRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;

/// Embedded SQL schema for the Postgres adapters.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
