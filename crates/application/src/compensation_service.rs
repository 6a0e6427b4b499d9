//! Append-only compensation ledger.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use roster_core::{AppError, AppResult};
use roster_domain::{Compensation, EmployeeId, Salary};
use tracing::debug;

use crate::{CompensationRepository, EmployeeRepository, NewCompensationRecord};

const EFFECTIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw compensation fields supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendCompensationInput {
    /// Decimal salary text, for example `"85000.00"`.
    pub salary: String,
    /// Optional `YYYY-MM-DD` effective date. Defaults to today (UTC).
    pub effective_date: Option<String>,
}

/// Application service for compensation entries.
#[derive(Clone)]
pub struct CompensationService {
    employee_repository: Arc<dyn EmployeeRepository>,
    compensation_repository: Arc<dyn CompensationRepository>,
}

impl CompensationService {
    /// Creates a new compensation service.
    #[must_use]
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        compensation_repository: Arc<dyn CompensationRepository>,
    ) -> Self {
        Self {
            employee_repository,
            compensation_repository,
        }
    }

    /// Appends a new entry for an existing employee.
    ///
    /// Earlier entries for the same employee are never touched.
    pub async fn append(
        &self,
        employee_id: EmployeeId,
        input: AppendCompensationInput,
    ) -> AppResult<Compensation> {
        debug!(%employee_id, "saving compensation");

        let salary = input.salary.parse::<Salary>()?;
        let effective_date = match input.effective_date.as_deref() {
            Some(value) => parse_effective_date(value)?,
            None => Utc::now().date_naive(),
        };

        self.require_employee(employee_id).await?;

        self.compensation_repository
            .insert(NewCompensationRecord {
                employee_id,
                salary,
                effective_date,
            })
            .await
    }

    /// Returns the current entry: latest effective date, most recent append
    /// on ties.
    pub async fn retrieve(&self, employee_id: EmployeeId) -> AppResult<Compensation> {
        debug!(%employee_id, "retrieving compensation");

        self.require_employee(employee_id).await?;

        self.compensation_repository
            .find_current_for_employee(employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "no compensation recorded for employee '{employee_id}'"
                ))
            })
    }

    /// Returns every entry for the employee, oldest effective date first.
    pub async fn history(&self, employee_id: EmployeeId) -> AppResult<Vec<Compensation>> {
        self.require_employee(employee_id).await?;
        self.compensation_repository
            .list_for_employee(employee_id)
            .await
    }

    async fn require_employee(&self, employee_id: EmployeeId) -> AppResult<()> {
        if self.employee_repository.exists_by_id(employee_id).await? {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "employee '{employee_id}' does not exist"
        )))
    }
}

fn parse_effective_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), EFFECTIVE_DATE_FORMAT).map_err(|error| {
        AppError::Validation(format!(
            "effective date '{value}' must use YYYY-MM-DD: {error}"
        ))
    })
}
