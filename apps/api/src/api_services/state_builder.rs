use std::sync::Arc;

use roster_application::{
    CompensationRepository, CompensationService, EmployeeRepository, EmployeeService,
};
use roster_infrastructure::{
    InMemoryCompensationRepository, InMemoryEmployeeRepository, PostgresCompensationRepository,
    PostgresEmployeeRepository,
};
use sqlx::PgPool;

use crate::state::AppState;

struct RepositorySet {
    employee_repository: Arc<dyn EmployeeRepository>,
    compensation_repository: Arc<dyn CompensationRepository>,
}

pub fn build_in_memory_app_state() -> AppState {
    build_app_state(RepositorySet {
        employee_repository: Arc::new(InMemoryEmployeeRepository::new()),
        compensation_repository: Arc::new(InMemoryCompensationRepository::new()),
    })
}

pub fn build_postgres_app_state(pool: PgPool) -> AppState {
    build_app_state(RepositorySet {
        employee_repository: Arc::new(PostgresEmployeeRepository::new(pool.clone())),
        compensation_repository: Arc::new(PostgresCompensationRepository::new(pool)),
    })
}

fn build_app_state(repositories: RepositorySet) -> AppState {
    AppState {
        employee_service: EmployeeService::new(repositories.employee_repository.clone()),
        compensation_service: CompensationService::new(
            repositories.employee_repository,
            repositories.compensation_repository,
        ),
    }
}
