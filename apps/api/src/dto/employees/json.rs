use serde::Serialize;

use super::types::{
    DirectReportResponse, DirectReportStubResponse, EmployeeResponse, ReportingStructureResponse,
};
use crate::dto::JsonTree;

enum Step<'a> {
    Employee(&'a EmployeeResponse),
    Stub(&'a DirectReportStubResponse),
    Raw(&'static str),
}

fn write_field(
    out: &mut Vec<u8>,
    prefix: &str,
    name: &str,
    value: &impl Serialize,
) -> serde_json::Result<()> {
    out.extend_from_slice(prefix.as_bytes());
    serde_json::to_writer(&mut *out, name)?;
    out.push(b':');
    serde_json::to_writer(&mut *out, value)
}

impl JsonTree for EmployeeResponse {
    fn write_json(&self, out: &mut Vec<u8>) -> serde_json::Result<()> {
        let mut pending = vec![Step::Employee(self)];

        while let Some(step) = pending.pop() {
            match step {
                Step::Raw(text) => out.extend_from_slice(text.as_bytes()),
                Step::Stub(stub) => serde_json::to_writer(&mut *out, stub)?,
                Step::Employee(employee) => {
                    write_field(out, "{", "employeeId", &employee.employee_id)?;
                    write_field(out, ",", "firstName", &employee.first_name)?;
                    write_field(out, ",", "lastName", &employee.last_name)?;
                    write_field(out, ",", "department", &employee.department)?;
                    write_field(out, ",", "position", &employee.position)?;
                    out.extend_from_slice(br#","directReports":["#);

                    pending.push(Step::Raw("]}"));
                    for (index, report) in employee.direct_reports.iter().enumerate().rev() {
                        pending.push(match report {
                            DirectReportResponse::Resolved(child) => Step::Employee(child.as_ref()),
                            DirectReportResponse::Stub(stub) => Step::Stub(stub),
                        });
                        if index > 0 {
                            pending.push(Step::Raw(","));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl JsonTree for ReportingStructureResponse {
    fn write_json(&self, out: &mut Vec<u8>) -> serde_json::Result<()> {
        out.extend_from_slice(br#"{"employee":"#);
        self.employee.write_json(out)?;
        write_field(out, ",", "numberOfReports", &self.number_of_reports)?;
        out.push(b'}');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{
        DirectReportResponse, DirectReportStubResponse, EmployeeResponse, JsonTree,
        ReportingStructureResponse,
    };

    fn employee(name: &str, direct_reports: Vec<DirectReportResponse>) -> EmployeeResponse {
        EmployeeResponse {
            employee_id: format!("id-{name}"),
            first_name: name.to_owned(),
            last_name: "Starr \"Ringo\"".to_owned(),
            department: "Engineering".to_owned(),
            position: "Developer".to_owned(),
            direct_reports,
        }
    }

    fn rendered(tree: &impl JsonTree) -> Value {
        let mut out = Vec::new();
        assert!(tree.write_json(&mut out).is_ok());
        serde_json::from_slice(&out).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn renders_nested_reports_and_stubs_in_order() {
        let tree = employee(
            "John",
            vec![
                DirectReportResponse::Resolved(Box::new(employee("Paul", Vec::new()))),
                DirectReportResponse::Stub(DirectReportStubResponse {
                    employee_id: "id-Pete".to_owned(),
                }),
            ],
        );
        let structure = ReportingStructureResponse {
            employee: tree,
            number_of_reports: 2,
        };

        assert_eq!(
            rendered(&structure),
            json!({
                "employee": {
                    "employeeId": "id-John",
                    "firstName": "John",
                    "lastName": "Starr \"Ringo\"",
                    "department": "Engineering",
                    "position": "Developer",
                    "directReports": [
                        {
                            "employeeId": "id-Paul",
                            "firstName": "Paul",
                            "lastName": "Starr \"Ringo\"",
                            "department": "Engineering",
                            "position": "Developer",
                            "directReports": []
                        },
                        { "employeeId": "id-Pete" }
                    ]
                },
                "numberOfReports": 2
            })
        );
    }
}
