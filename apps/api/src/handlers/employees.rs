use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use roster_domain::EmployeeId;

use crate::dto::{EmployeeRequest, EmployeeResponse, ReportingStructureResponse, TreeJson};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<(StatusCode, TreeJson<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create(payload.into_input()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        TreeJson(EmployeeResponse::try_from(&employee)?),
    ))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<TreeJson<EmployeeResponse>> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let employee = state.employee_service.read(employee_id).await?;

    Ok(TreeJson(EmployeeResponse::try_from(&employee)?))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<TreeJson<EmployeeResponse>> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let employee = state
        .employee_service
        .update(employee_id, payload.into_input()?)
        .await?;

    Ok(TreeJson(EmployeeResponse::try_from(&employee)?))
}

pub async fn reporting_structure_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<TreeJson<ReportingStructureResponse>> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let structure = state
        .employee_service
        .reporting_structure(employee_id)
        .await?;

    Ok(TreeJson(ReportingStructureResponse::try_from(structure)?))
}
