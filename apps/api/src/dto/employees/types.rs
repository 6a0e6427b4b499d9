use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for employee create and update.
///
/// Any `employeeId` in the body is ignored; create assigns one and update
/// takes it from the path.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-request.ts"
)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub position: String,
    pub direct_reports: Vec<DirectReportRequest>,
}

/// Reference to a direct report inside an employee request.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/direct-report-request.ts"
)]
pub struct DirectReportRequest {
    pub employee_id: String,
}

/// API representation of an employee.
///
/// Resolved trees can be arbitrarily deep, so this type and its report
/// variants are rendered by [`JsonTree`](crate::dto::JsonTree) rather than
/// derived `Serialize`.
#[derive(Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    rename_all = "camelCase",
    export_to = "../../../packages/api-types/src/generated/employee-response.ts"
)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub position: String,
    pub direct_reports: Vec<DirectReportResponse>,
}

impl Drop for EmployeeResponse {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.direct_reports);
        while let Some(report) = pending.pop() {
            if let DirectReportResponse::Resolved(mut employee) = report {
                pending.append(&mut employee.direct_reports);
            }
        }
    }
}

/// Direct report as rendered in an employee response.
#[derive(Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    untagged,
    export_to = "../../../packages/api-types/src/generated/direct-report-response.ts"
)]
pub enum DirectReportResponse {
    Resolved(Box<EmployeeResponse>),
    Stub(DirectReportStubResponse),
}

/// Unresolved direct report carrying only its identifier.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/direct-report-stub-response.ts"
)]
pub struct DirectReportStubResponse {
    pub employee_id: String,
}

/// Resolved employee with the size of its reporting tree.
#[derive(Debug, TS)]
#[ts(
    export,
    rename_all = "camelCase",
    export_to = "../../../packages/api-types/src/generated/reporting-structure-response.ts"
)]
pub struct ReportingStructureResponse {
    pub employee: EmployeeResponse,
    pub number_of_reports: usize,
}
