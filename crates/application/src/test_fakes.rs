use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use roster_core::{AppError, AppResult};
use roster_domain::{Compensation, Employee, EmployeeId};

use crate::{CompensationRepository, EmployeeRepository, NewCompensationRecord};

#[derive(Default)]
pub(crate) struct FakeEmployeeRepository {
    employees: Mutex<HashMap<EmployeeId, Employee>>,
    lookups: AtomicUsize,
}

impl FakeEmployeeRepository {
    pub(crate) async fn seed(&self, employee: Employee) {
        self.employees
            .lock()
            .await
            .insert(employee.id(), employee.into_stored_form());
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for FakeEmployeeRepository {
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.employees.lock().await.get(&employee_id).cloned())
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        let mut employees = self.employees.lock().await;
        if employees.contains_key(&employee.id()) {
            return Err(AppError::Conflict(format!(
                "employee '{}' already exists",
                employee.id()
            )));
        }

        let stored = employee.into_stored_form();
        employees.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn save(&self, employee: Employee) -> AppResult<Employee> {
        let stored = employee.into_stored_form();
        self.employees
            .lock()
            .await
            .insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn exists_by_id(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self.employees.lock().await.contains_key(&employee_id))
    }

    async fn find_manager_of(&self, report_id: EmployeeId) -> AppResult<Option<EmployeeId>> {
        Ok(self
            .employees
            .lock()
            .await
            .values()
            .find(|employee| employee.direct_report_ids().contains(&report_id))
            .map(Employee::id))
    }
}

#[derive(Default)]
pub(crate) struct FakeCompensationRepository {
    entries: Mutex<Vec<Compensation>>,
}

impl FakeCompensationRepository {
    pub(crate) async fn stored(&self) -> Vec<Compensation> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl CompensationRepository for FakeCompensationRepository {
    async fn find_current_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Compensation>> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .filter(|entry| entry.employee_id() == employee_id)
            .max_by_key(|entry| entry.ledger_key())
            .cloned())
    }

    async fn list_for_employee(&self, employee_id: EmployeeId) -> AppResult<Vec<Compensation>> {
        let mut listed: Vec<Compensation> = self
            .entries
            .lock()
            .await
            .iter()
            .filter(|entry| entry.employee_id() == employee_id)
            .cloned()
            .collect();
        listed.sort_by_key(Compensation::ledger_key);
        Ok(listed)
    }

    async fn insert(&self, record: NewCompensationRecord) -> AppResult<Compensation> {
        let mut entries = self.entries.lock().await;
        let sequence = i64::try_from(entries.len())
            .unwrap_or(i64::MAX)
            .saturating_add(1);
        let entry = Compensation::new(
            record.employee_id,
            record.salary,
            record.effective_date,
            sequence,
        );
        entries.push(entry.clone());
        Ok(entry)
    }
}
