use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use roster_domain::EmployeeId;

use crate::dto::{AppendCompensationRequest, CompensationResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn append_compensation_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<AppendCompensationRequest>,
) -> ApiResult<(StatusCode, Json<CompensationResponse>)> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let compensation = state
        .compensation_service
        .append(employee_id, payload.into_input()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CompensationResponse::from(compensation)),
    ))
}

pub async fn get_compensation_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<CompensationResponse>> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let compensation = state.compensation_service.retrieve(employee_id).await?;

    Ok(Json(CompensationResponse::from(compensation)))
}

pub async fn compensation_history_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<Vec<CompensationResponse>>> {
    let employee_id = employee_id.parse::<EmployeeId>()?;
    let history = state
        .compensation_service
        .history(employee_id)
        .await?
        .into_iter()
        .map(CompensationResponse::from)
        .collect();

    Ok(Json(history))
}
