mod conversions;
mod json;
mod types;

pub use types::{
    DirectReportRequest, DirectReportResponse, DirectReportStubResponse, EmployeeRequest,
    EmployeeResponse, ReportingStructureResponse,
};
