use roster_application::AppendCompensationInput;
use roster_core::{AppError, AppResult};
use roster_domain::Compensation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Incoming payload for appending a compensation entry.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/append-compensation-request.ts"
)]
pub struct AppendCompensationRequest {
    #[ts(type = "number | string")]
    pub salary: Value,
    pub effective_date: Option<String>,
}

impl AppendCompensationRequest {
    /// Normalizes the salary to decimal text and converts to service input.
    pub fn into_input(self) -> AppResult<AppendCompensationInput> {
        let salary = match self.salary {
            Value::String(text) => text,
            Value::Number(number) => match number.as_f64() {
                // Float `Number` text switches to exponent form for large values.
                Some(amount) if number.is_f64() => amount.to_string(),
                _ => number.to_string(),
            },
            Value::Null => {
                return Err(AppError::Validation("salary is required".to_owned()));
            }
            other => {
                return Err(AppError::Validation(format!(
                    "salary must be a number or a decimal string, got {other}"
                )));
            }
        };

        Ok(AppendCompensationInput {
            salary,
            effective_date: self.effective_date,
        })
    }
}

/// API representation of a compensation entry.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/compensation-response.ts"
)]
pub struct CompensationResponse {
    pub employee_id: String,
    pub salary: String,
    pub effective_date: String,
}

impl From<Compensation> for CompensationResponse {
    fn from(compensation: Compensation) -> Self {
        Self {
            employee_id: compensation.employee_id().to_string(),
            salary: compensation.salary().to_string(),
            effective_date: compensation.effective_date().format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::AppError;
    use roster_domain::Salary;
    use serde_json::json;

    use super::AppendCompensationRequest;

    fn request(body: serde_json::Value) -> AppendCompensationRequest {
        serde_json::from_value(body).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn numeric_and_string_salaries_are_accepted() {
        let numeric = request(json!({ "salary": 85000.5 }))
            .into_input()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(numeric.salary, "85000.5");

        let text = request(json!({ "salary": "85000.50", "effectiveDate": "2025-01-01" }))
            .into_input()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(text.salary, "85000.50");
        assert_eq!(text.effective_date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn missing_or_structured_salary_is_rejected() {
        assert!(matches!(
            request(json!({})).into_input(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            request(json!({ "salary": [1] })).into_input(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn oversized_numeric_salary_reads_as_plain_digits() {
        let body: AppendCompensationRequest =
            serde_json::from_str(r#"{ "salary": 100000000000000000000 }"#)
                .unwrap_or_else(|_| unreachable!());
        let input = body.into_input().unwrap_or_else(|_| unreachable!());
        assert_eq!(input.salary, "100000000000000000000");

        let Err(AppError::Validation(message)) = input.salary.parse::<Salary>() else {
            unreachable!()
        };
        assert!(message.contains("too large"), "{message}");

        let small = request(json!({ "salary": 1.0e-3 }))
            .into_input()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(small.salary, "0.001");
    }
}
