mod common;
mod compensation;
mod employees;
mod tree_json;

pub use common::HealthResponse;
pub use compensation::{AppendCompensationRequest, CompensationResponse};
pub use employees::{
    DirectReportRequest, DirectReportResponse, DirectReportStubResponse, EmployeeRequest,
    EmployeeResponse, ReportingStructureResponse,
};
pub use tree_json::{JsonTree, TreeJson};
