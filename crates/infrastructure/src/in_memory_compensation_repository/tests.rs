use chrono::NaiveDate;
use roster_application::{CompensationRepository, NewCompensationRecord};
use roster_domain::{EmployeeId, Salary};

use super::InMemoryCompensationRepository;

fn record(employee_id: EmployeeId, salary: &str, date: (i32, u32, u32)) -> NewCompensationRecord {
    NewCompensationRecord {
        employee_id,
        salary: salary.parse::<Salary>().unwrap_or_else(|_| unreachable!()),
        effective_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap_or_else(|| unreachable!()),
    }
}

#[tokio::test]
async fn sequences_increase_across_employees() {
    let repository = InMemoryCompensationRepository::new();
    let first = repository
        .insert(record(EmployeeId::new(), "10", (2024, 1, 1)))
        .await
        .unwrap_or_else(|_| unreachable!());
    let second = repository
        .insert(record(EmployeeId::new(), "20", (2024, 1, 1)))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert!(second.sequence() > first.sequence());
}

#[tokio::test]
async fn current_entry_uses_latest_date_then_latest_append() {
    let repository = InMemoryCompensationRepository::new();
    let employee_id = EmployeeId::new();

    for (salary, date) in [("100", (2024, 5, 1)), ("300", (2025, 1, 1)), ("200", (2023, 1, 1))] {
        assert!(repository.insert(record(employee_id, salary, date)).await.is_ok());
    }

    let current = repository
        .find_current_for_employee(employee_id)
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(current.salary().to_string(), "300.00");

    assert!(repository.insert(record(employee_id, "350", (2025, 1, 1))).await.is_ok());
    let current = repository
        .find_current_for_employee(employee_id)
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(current.salary().to_string(), "350.00");
}

#[tokio::test]
async fn entries_do_not_leak_across_employees() {
    let repository = InMemoryCompensationRepository::new();
    let employee_id = EmployeeId::new();
    assert!(repository.insert(record(employee_id, "10", (2024, 1, 1))).await.is_ok());

    let other = EmployeeId::new();
    assert!(
        repository
            .find_current_for_employee(other)
            .await
            .unwrap_or_default()
            .is_none()
    );
    assert!(repository.list_for_employee(other).await.unwrap_or_default().is_empty());
    assert_eq!(repository.list_for_employee(employee_id).await.unwrap_or_default().len(), 1);
}
