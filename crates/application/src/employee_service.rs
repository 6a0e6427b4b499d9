//! Employee lifecycle and reporting-structure operations.

use std::sync::Arc;

use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId, ReportingStructure};
use tracing::{debug, error};

use crate::{EmployeeRepository, HierarchyResolver};

/// Caller-supplied employee fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Identifiers of the employee's direct reports, in display order.
    pub direct_report_ids: Vec<EmployeeId>,
}

/// Application service for employee records and their hierarchies.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    resolver: HierarchyResolver,
}

impl EmployeeService {
    /// Creates a new employee service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            resolver: HierarchyResolver::new(repository.clone()),
            repository,
        }
    }

    /// Creates an employee under a freshly generated identifier.
    pub async fn create(&self, input: EmployeeInput) -> AppResult<Employee> {
        let employee_id = EmployeeId::new();
        debug!(%employee_id, first_name = %input.first_name, "creating employee");

        let employee = self.build_employee(employee_id, input).await?;
        self.repository.insert(employee).await
    }

    /// Returns the employee with its full reporting tree resolved.
    pub async fn read(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        debug!(%employee_id, "reading employee");
        self.resolve(employee_id).await
    }

    /// Replaces every stored field of an existing employee.
    pub async fn update(&self, employee_id: EmployeeId, input: EmployeeInput) -> AppResult<Employee> {
        debug!(%employee_id, "updating employee");

        if !self.repository.exists_by_id(employee_id).await? {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' does not exist"
            )));
        }

        let employee = self.build_employee(employee_id, input).await?;
        self.repository.save(employee).await
    }

    /// Returns the resolved employee together with its transitive report count.
    pub async fn reporting_structure(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<ReportingStructure> {
        debug!(%employee_id, "generating reporting structure");

        let employee = self.resolve(employee_id).await?;
        Ok(ReportingStructure::from_resolved(employee))
    }

    async fn resolve(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        self.resolver.resolve(employee_id).await.inspect_err(|failure| {
            if failure.is_graph_integrity_violation() {
                error!(%employee_id, error = %failure, "stored reporting hierarchy is corrupt");
            }
        })
    }

    async fn build_employee(
        &self,
        employee_id: EmployeeId,
        input: EmployeeInput,
    ) -> AppResult<Employee> {
        let employee = Employee::new(
            employee_id,
            input.first_name,
            input.last_name,
            input.department,
            input.position,
            input.direct_report_ids,
        )?;

        for report_id in employee.direct_report_ids() {
            if !self.repository.exists_by_id(report_id).await? {
                return Err(AppError::Validation(format!(
                    "direct report '{report_id}' does not exist"
                )));
            }

            // An employee reports to at most one manager.
            if let Some(manager_id) = self.repository.find_manager_of(report_id).await?
                && manager_id != employee_id
            {
                return Err(AppError::Validation(format!(
                    "employee '{report_id}' already reports to '{manager_id}'"
                )));
            }
        }

        Ok(employee)
    }
}
