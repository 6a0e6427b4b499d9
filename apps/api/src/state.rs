use roster_application::{CompensationService, EmployeeService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub compensation_service: CompensationService,
}
