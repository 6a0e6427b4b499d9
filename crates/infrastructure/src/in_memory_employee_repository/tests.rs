use roster_application::EmployeeRepository;
use roster_core::AppError;
use roster_domain::{DirectReport, Employee, EmployeeId};

use super::InMemoryEmployeeRepository;

fn employee(id: EmployeeId, position: &str, reports: Vec<EmployeeId>) -> Employee {
    Employee::new(id, "Jane", "Roe", "Finance", position, reports)
        .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn insert_then_find_returns_stored_record() {
    let repository = InMemoryEmployeeRepository::new();
    let id = EmployeeId::new();

    let inserted = repository.insert(employee(id, "Analyst", Vec::new())).await;
    assert!(inserted.is_ok());

    let found = repository.find_by_id(id).await.unwrap_or_default();
    assert_eq!(
        found.map(|record| record.position().as_str().to_owned()),
        Some("Analyst".to_owned())
    );
    assert!(repository.exists_by_id(id).await.unwrap_or_default());
    assert!(!repository.exists_by_id(EmployeeId::new()).await.unwrap_or(true));
}

#[tokio::test]
async fn duplicate_insert_conflicts() {
    let repository = InMemoryEmployeeRepository::new();
    let id = EmployeeId::new();

    assert!(repository.insert(employee(id, "Analyst", Vec::new())).await.is_ok());
    let duplicate = repository.insert(employee(id, "Analyst", Vec::new())).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn save_replaces_fields_and_report_ids() {
    let repository = InMemoryEmployeeRepository::new();
    let id = EmployeeId::new();
    let report_id = EmployeeId::new();
    assert!(repository.insert(employee(id, "Analyst", Vec::new())).await.is_ok());

    let saved = repository
        .save(employee(id, "Controller", vec![report_id]))
        .await;
    assert!(saved.is_ok());

    let found = repository
        .find_by_id(id)
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(found.position().as_str(), "Controller");
    assert_eq!(found.direct_report_ids(), vec![report_id]);
}

#[tokio::test]
async fn resolved_reports_are_persisted_as_stubs() {
    let repository = InMemoryEmployeeRepository::new();
    let report = employee(EmployeeId::new(), "Clerk", Vec::new());
    let report_id = report.id();
    let mut manager = employee(EmployeeId::new(), "Manager", vec![report_id]);
    manager.set_direct_reports(vec![DirectReport::Resolved(Box::new(report))]);
    let manager_id = manager.id();

    assert!(repository.save(manager).await.is_ok());

    let found = repository
        .find_by_id(manager_id)
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(found.direct_reports(), &[DirectReport::Stub(report_id)]);
}

#[tokio::test]
async fn find_manager_of_scans_direct_report_lists() {
    let repository = InMemoryEmployeeRepository::new();
    let (manager, report) = (EmployeeId::new(), EmployeeId::new());
    assert!(repository.insert(employee(report, "Clerk", Vec::new())).await.is_ok());
    assert!(repository.insert(employee(manager, "Lead", vec![report])).await.is_ok());

    assert_eq!(
        repository.find_manager_of(report).await.unwrap_or_default(),
        Some(manager)
    );
    assert!(repository.find_manager_of(manager).await.unwrap_or_default().is_none());
}
