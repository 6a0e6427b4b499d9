use std::collections::HashMap;

use async_trait::async_trait;
use roster_application::EmployeeRepository;
use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId};
use tokio::sync::RwLock;

/// In-memory employee repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<HashMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&employee_id).cloned())
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        let stored = employee.into_stored_form();
        let mut employees = self.employees.write().await;

        if employees.contains_key(&stored.id()) {
            return Err(AppError::Conflict(format!(
                "employee '{}' already exists",
                stored.id()
            )));
        }

        employees.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn save(&self, employee: Employee) -> AppResult<Employee> {
        let stored = employee.into_stored_form();
        self.employees
            .write()
            .await
            .insert(stored.id(), stored.clone());

        Ok(stored)
    }

    async fn exists_by_id(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self.employees.read().await.contains_key(&employee_id))
    }

    async fn find_manager_of(&self, report_id: EmployeeId) -> AppResult<Option<EmployeeId>> {
        Ok(self
            .employees
            .read()
            .await
            .values()
            .find(|employee| {
                employee
                    .direct_reports()
                    .iter()
                    .any(|report| report.id() == report_id)
            })
            .map(Employee::id))
    }
}

#[cfg(test)]
mod tests;
