//! Employee records and their direct-report references.

use std::collections::HashSet;
use std::str::FromStr;

use roster_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Creates a new random employee identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an employee identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|error| AppError::Validation(format!("invalid employee id '{value}': {error}")))
    }
}

/// Reference from a manager to one of its direct reports.
///
/// Stored records only ever hold [`DirectReport::Stub`]; resolution swaps
/// each stub for the full record it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectReport {
    /// Identifier only, pending resolution.
    Stub(EmployeeId),
    /// Fully materialized employee record.
    Resolved(Box<Employee>),
}

impl DirectReport {
    /// Returns the referenced employee identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        match self {
            Self::Stub(id) => *id,
            Self::Resolved(employee) => employee.id(),
        }
    }

    /// Returns the materialized record, if this reference has been resolved.
    #[must_use]
    pub fn as_resolved(&self) -> Option<&Employee> {
        match self {
            Self::Stub(_) => None,
            Self::Resolved(employee) => Some(employee),
        }
    }
}

/// Employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    first_name: NonEmptyString,
    last_name: NonEmptyString,
    department: NonEmptyString,
    position: NonEmptyString,
    direct_reports: Vec<DirectReport>,
}

impl Employee {
    /// Creates a validated employee record whose direct reports are stubs.
    ///
    /// The direct-report list must not repeat an identifier or name the
    /// employee itself.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        direct_report_ids: Vec<EmployeeId>,
    ) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(direct_report_ids.len());
        for report_id in &direct_report_ids {
            if *report_id == id {
                return Err(AppError::Validation(format!(
                    "employee '{id}' cannot be its own direct report"
                )));
            }

            if !seen.insert(*report_id) {
                return Err(AppError::Validation(format!(
                    "direct report '{report_id}' is listed more than once"
                )));
            }
        }

        Ok(Self {
            id,
            first_name: NonEmptyString::new(first_name)?,
            last_name: NonEmptyString::new(last_name)?,
            department: NonEmptyString::new(department)?,
            position: NonEmptyString::new(position)?,
            direct_reports: direct_report_ids
                .into_iter()
                .map(DirectReport::Stub)
                .collect(),
        })
    }

    /// Returns the employee identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &NonEmptyString {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &NonEmptyString {
        &self.last_name
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &NonEmptyString {
        &self.department
    }

    /// Returns the position title.
    #[must_use]
    pub fn position(&self) -> &NonEmptyString {
        &self.position
    }

    /// Returns direct-report references in their stored order.
    #[must_use]
    pub fn direct_reports(&self) -> &[DirectReport] {
        &self.direct_reports
    }

    /// Returns the identifiers of every direct report in order.
    #[must_use]
    pub fn direct_report_ids(&self) -> Vec<EmployeeId> {
        self.direct_reports.iter().map(DirectReport::id).collect()
    }

    /// Returns whether the employee has no direct reports.
    #[must_use]
    pub fn has_no_direct_reports(&self) -> bool {
        self.direct_reports.is_empty()
    }

    /// Replaces the direct-report list wholesale.
    pub fn set_direct_reports(&mut self, direct_reports: Vec<DirectReport>) {
        self.direct_reports = direct_reports;
    }

    /// Collapses every direct report back to a stub, dropping resolved subtrees.
    #[must_use]
    pub fn into_stored_form(mut self) -> Self {
        let ids = self.direct_report_ids();
        self.direct_reports = ids.into_iter().map(DirectReport::Stub).collect();
        self
    }
}

// Resolved hierarchies can be arbitrarily deep; release them iteratively so
// dropping a long chain cannot exhaust the stack.
impl Drop for Employee {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.direct_reports);
        while let Some(report) = pending.pop() {
            if let DirectReport::Resolved(mut employee) = report {
                pending.append(&mut employee.direct_reports);
            }
        }
    }
}
