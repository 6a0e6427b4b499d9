//! Application services and ports.

#![forbid(unsafe_code)]

mod compensation_service;
mod employee_ports;
mod employee_service;
mod hierarchy_resolver;

#[cfg(test)]
mod test_fakes;

pub use compensation_service::{AppendCompensationInput, CompensationService};
pub use employee_ports::{CompensationRepository, EmployeeRepository, NewCompensationRecord};
pub use employee_service::{EmployeeInput, EmployeeService};
pub use hierarchy_resolver::HierarchyResolver;
