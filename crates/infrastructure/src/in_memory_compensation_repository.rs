use std::collections::HashMap;

use async_trait::async_trait;
use roster_application::{CompensationRepository, NewCompensationRecord};
use roster_core::{AppError, AppResult};
use roster_domain::{Compensation, EmployeeId};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Ledger {
    last_sequence: i64,
    entries: HashMap<EmployeeId, Vec<Compensation>>,
}

/// In-memory append-only compensation ledger.
#[derive(Debug, Default)]
pub struct InMemoryCompensationRepository {
    ledger: RwLock<Ledger>,
}

impl InMemoryCompensationRepository {
    /// Creates an empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompensationRepository for InMemoryCompensationRepository {
    async fn find_current_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Compensation>> {
        Ok(self
            .ledger
            .read()
            .await
            .entries
            .get(&employee_id)
            .and_then(|entries| entries.iter().max_by_key(|entry| entry.ledger_key()))
            .cloned())
    }

    async fn list_for_employee(&self, employee_id: EmployeeId) -> AppResult<Vec<Compensation>> {
        let mut listed = self
            .ledger
            .read()
            .await
            .entries
            .get(&employee_id)
            .cloned()
            .unwrap_or_default();
        listed.sort_by_key(Compensation::ledger_key);

        Ok(listed)
    }

    async fn insert(&self, record: NewCompensationRecord) -> AppResult<Compensation> {
        let mut ledger = self.ledger.write().await;
        let sequence = ledger
            .last_sequence
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("compensation sequence exhausted".to_owned()))?;

        let entry = Compensation::new(
            record.employee_id,
            record.salary,
            record.effective_date,
            sequence,
        );
        ledger.last_sequence = sequence;
        ledger
            .entries
            .entry(record.employee_id)
            .or_default()
            .push(entry.clone());

        Ok(entry)
    }
}

#[cfg(test)]
mod tests;
