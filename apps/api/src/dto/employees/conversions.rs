use roster_application::EmployeeInput;
use roster_core::{AppError, AppResult};
use roster_domain::{DirectReport, Employee, EmployeeId, ReportingStructure};

use super::types::{
    DirectReportResponse, DirectReportStubResponse, EmployeeRequest, EmployeeResponse,
    ReportingStructureResponse,
};

impl EmployeeRequest {
    /// Parses report identifiers and converts the payload to service input.
    pub fn into_input(self) -> AppResult<EmployeeInput> {
        let direct_report_ids = self
            .direct_reports
            .into_iter()
            .map(|report| report.employee_id.parse::<EmployeeId>())
            .collect::<AppResult<Vec<_>>>()?;

        Ok(EmployeeInput {
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            position: self.position,
            direct_report_ids,
        })
    }
}

impl TryFrom<&Employee> for EmployeeResponse {
    type Error = AppError;

    /// Converts without recursion: records are listed in pre-order, then
    /// built in reverse so each one finds its resolved reports on top of the
    /// `built` stack in their original order.
    fn try_from(root: &Employee) -> AppResult<Self> {
        let mut preorder = Vec::new();
        let mut pending = vec![root];
        while let Some(employee) = pending.pop() {
            preorder.push(employee);
            pending.extend(
                employee
                    .direct_reports()
                    .iter()
                    .rev()
                    .filter_map(DirectReport::as_resolved),
            );
        }

        let mut built: Vec<EmployeeResponse> = Vec::with_capacity(preorder.len());
        for employee in preorder.into_iter().rev() {
            let mut direct_reports = Vec::with_capacity(employee.direct_reports().len());
            for report in employee.direct_reports() {
                let rendered = match report {
                    DirectReport::Stub(id) => DirectReportResponse::Stub(DirectReportStubResponse {
                        employee_id: id.to_string(),
                    }),
                    DirectReport::Resolved(_) => {
                        let child = built.pop().ok_or_else(|| {
                            AppError::Internal(format!(
                                "response for direct report '{}' was not built",
                                report.id()
                            ))
                        })?;
                        DirectReportResponse::Resolved(Box::new(child))
                    }
                };
                direct_reports.push(rendered);
            }

            built.push(EmployeeResponse {
                employee_id: employee.id().to_string(),
                first_name: employee.first_name().as_str().to_owned(),
                last_name: employee.last_name().as_str().to_owned(),
                department: employee.department().as_str().to_owned(),
                position: employee.position().as_str().to_owned(),
                direct_reports,
            });
        }

        built
            .pop()
            .ok_or_else(|| AppError::Internal("employee response has no root".to_owned()))
    }
}

impl TryFrom<ReportingStructure> for ReportingStructureResponse {
    type Error = AppError;

    fn try_from(structure: ReportingStructure) -> AppResult<Self> {
        Ok(Self {
            employee: EmployeeResponse::try_from(structure.employee())?,
            number_of_reports: structure.number_of_reports(),
        })
    }
}
