use async_trait::async_trait;
use chrono::NaiveDate;
use roster_application::{CompensationRepository, NewCompensationRecord};
use roster_core::{AppError, AppResult};
use roster_domain::{Compensation, EmployeeId, Salary};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL-backed append-only compensation ledger.
#[derive(Clone)]
pub struct PostgresCompensationRepository {
    pool: PgPool,
}

impl PostgresCompensationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompensationRow {
    sequence: i64,
    employee_id: Uuid,
    salary_minor: i64,
    effective_date: NaiveDate,
}

impl CompensationRow {
    fn into_compensation(self) -> AppResult<Compensation> {
        let salary = Salary::from_minor_units(self.salary_minor).map_err(|error| {
            AppError::Internal(format!(
                "stored compensation #{} is invalid: {error}",
                self.sequence
            ))
        })?;

        Ok(Compensation::new(
            EmployeeId::from_uuid(self.employee_id),
            salary,
            self.effective_date,
            self.sequence,
        ))
    }
}

#[async_trait]
impl CompensationRepository for PostgresCompensationRepository {
    async fn find_current_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Compensation>> {
        let row = sqlx::query_as::<_, CompensationRow>(
            r#"
            SELECT sequence, employee_id, salary_minor, effective_date
            FROM compensations
            WHERE employee_id = $1
            ORDER BY effective_date DESC, sequence DESC
            LIMIT 1
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find compensation for employee '{employee_id}': {error}"
            ))
        })?;

        row.map(CompensationRow::into_compensation).transpose()
    }

    async fn list_for_employee(&self, employee_id: EmployeeId) -> AppResult<Vec<Compensation>> {
        let rows = sqlx::query_as::<_, CompensationRow>(
            r#"
            SELECT sequence, employee_id, salary_minor, effective_date
            FROM compensations
            WHERE employee_id = $1
            ORDER BY effective_date ASC, sequence ASC
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list compensation for employee '{employee_id}': {error}"
            ))
        })?;

        rows.into_iter()
            .map(CompensationRow::into_compensation)
            .collect()
    }

    async fn insert(&self, record: NewCompensationRecord) -> AppResult<Compensation> {
        let row = sqlx::query_as::<_, CompensationRow>(
            r#"
            INSERT INTO compensations (employee_id, salary_minor, effective_date)
            VALUES ($1, $2, $3)
            RETURNING sequence, employee_id, salary_minor, effective_date
            "#,
        )
        .bind(record.employee_id.as_uuid())
        .bind(record.salary.minor_units())
        .bind(record.effective_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to append compensation: {error}")))?;

        debug!(employee_id = %row.employee_id, sequence = row.sequence, "compensation appended");
        row.into_compensation()
    }
}
