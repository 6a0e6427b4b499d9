use async_trait::async_trait;
use chrono::NaiveDate;
use roster_core::AppResult;
use roster_domain::{Compensation, Employee, EmployeeId, Salary};

/// Repository port for employee records.
///
/// Implementations persist direct reports as identifiers only and return
/// them as stub references.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Looks up a single employee by identifier.
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Stores a new employee record. Fails with a conflict if the identifier
    /// is already taken.
    async fn insert(&self, employee: Employee) -> AppResult<Employee>;

    /// Replaces the stored record with the same identifier.
    async fn save(&self, employee: Employee) -> AppResult<Employee>;

    /// Returns whether an employee record exists for the identifier.
    async fn exists_by_id(&self, employee_id: EmployeeId) -> AppResult<bool>;

    /// Returns the employee whose direct-report list names `report_id`, if any.
    async fn find_manager_of(&self, report_id: EmployeeId) -> AppResult<Option<EmployeeId>>;
}

/// Compensation entry awaiting a store-assigned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompensationRecord {
    /// Employee the entry belongs to.
    pub employee_id: EmployeeId,
    /// Validated salary amount.
    pub salary: Salary,
    /// Date the salary takes effect.
    pub effective_date: NaiveDate,
}

/// Append-only repository port for compensation entries.
#[async_trait]
pub trait CompensationRepository: Send + Sync {
    /// Returns the current entry for an employee: latest effective date,
    /// ties broken by the most recent append.
    async fn find_current_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Compensation>>;

    /// Lists every entry for an employee ordered by effective date, then
    /// append sequence.
    async fn list_for_employee(&self, employee_id: EmployeeId) -> AppResult<Vec<Compensation>>;

    /// Appends a new entry and returns it with its assigned sequence.
    async fn insert(&self, record: NewCompensationRecord) -> AppResult<Compensation>;
}
