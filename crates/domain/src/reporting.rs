use std::collections::VecDeque;

use crate::{DirectReport, Employee};

/// Resolved employee paired with the size of its reporting tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingStructure {
    employee: Employee,
    number_of_reports: usize,
}

impl ReportingStructure {
    /// Builds the view from an already resolved hierarchy.
    #[must_use]
    pub fn from_resolved(employee: Employee) -> Self {
        let number_of_reports = count_reports(&employee);
        Self {
            employee,
            number_of_reports,
        }
    }

    /// Returns the resolved employee tree.
    #[must_use]
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the number of transitive reports beneath the employee.
    #[must_use]
    pub fn number_of_reports(&self) -> usize {
        self.number_of_reports
    }

    /// Splits the view into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Employee, usize) {
        (self.employee, self.number_of_reports)
    }
}

/// Counts every transitive report below `employee`, excluding the employee.
///
/// Walks the tree breadth-first without lookups. A stub reference counts as
/// a single report since its own subtree is not materialized.
#[must_use]
pub fn count_reports(employee: &Employee) -> usize {
    let mut queue: VecDeque<&DirectReport> = employee.direct_reports().iter().collect();
    let mut count = 0;

    while let Some(report) = queue.pop_front() {
        count += 1;
        if let Some(resolved) = report.as_resolved() {
            queue.extend(resolved.direct_reports());
        }
    }

    count
}
