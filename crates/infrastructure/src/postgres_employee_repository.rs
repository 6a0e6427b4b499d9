use async_trait::async_trait;
use roster_application::EmployeeRepository;
use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// PostgreSQL-backed employee repository.
///
/// Direct reports live in an ordered `UUID[]` column on the manager's row.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    department: String,
    position: String,
    direct_report_ids: Vec<Uuid>,
}

impl EmployeeRow {
    fn into_employee(self) -> AppResult<Employee> {
        let id = EmployeeId::from_uuid(self.id);
        Employee::new(
            id,
            self.first_name,
            self.last_name,
            self.department,
            self.position,
            self.direct_report_ids
                .into_iter()
                .map(EmployeeId::from_uuid)
                .collect(),
        )
        .map_err(|error| AppError::Internal(format!("stored employee '{id}' is invalid: {error}")))
    }
}

fn report_uuids(employee: &Employee) -> Vec<Uuid> {
    employee
        .direct_report_ids()
        .iter()
        .map(EmployeeId::as_uuid)
        .collect()
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, department, position, direct_report_ids
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find employee '{employee_id}': {error}"))
        })?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        let stored = employee.into_stored_form();
        let result = sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, department, position, direct_report_ids)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(stored.id().as_uuid())
        .bind(stored.first_name().as_str())
        .bind(stored.last_name().as_str())
        .bind(stored.department().as_str())
        .bind(stored.position().as_str())
        .bind(report_uuids(&stored))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(stored),
            Err(error) => {
                if let sqlx::Error::Database(database_error) = &error
                    && database_error.code().as_deref() == Some("23505")
                {
                    return Err(AppError::Conflict(format!(
                        "employee '{}' already exists",
                        stored.id()
                    )));
                }

                Err(AppError::Internal(format!(
                    "failed to insert employee: {error}"
                )))
            }
        }
    }

    async fn save(&self, employee: Employee) -> AppResult<Employee> {
        let stored = employee.into_stored_form();
        sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, department, position, direct_report_ids)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                department = EXCLUDED.department,
                position = EXCLUDED.position,
                direct_report_ids = EXCLUDED.direct_report_ids,
                updated_at = now()
            "#,
        )
        .bind(stored.id().as_uuid())
        .bind(stored.first_name().as_str())
        .bind(stored.last_name().as_str())
        .bind(stored.department().as_str())
        .bind(stored.position().as_str())
        .bind(report_uuids(&stored))
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to save employee '{}': {error}", stored.id()))
        })?;

        Ok(stored)
    }

    async fn exists_by_id(&self, employee_id: EmployeeId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM employees WHERE id = $1)
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to check employee '{employee_id}' existence: {error}"
            ))
        })
    }

    async fn find_manager_of(&self, report_id: EmployeeId) -> AppResult<Option<EmployeeId>> {
        let manager_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM employees
            WHERE direct_report_ids @> ARRAY[$1]::UUID[]
            LIMIT 1
            "#,
        )
        .bind(report_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find manager of employee '{report_id}': {error}"
            ))
        })?;

        Ok(manager_id.map(EmployeeId::from_uuid))
    }
}
