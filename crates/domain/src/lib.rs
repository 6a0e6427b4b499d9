//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod compensation;
mod employee;
mod reporting;

pub use compensation::{Compensation, Salary};
pub use employee::{DirectReport, Employee, EmployeeId};
pub use reporting::{ReportingStructure, count_reports};
