use axum::{Json, extract::State, http::StatusCode};
use courtside_core::models::attendance::{AttendanceEvent, AttendanceResponse, CheckInRequest};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn check_in(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CheckInRequest>,
) -> Result<(StatusCode, Json<AttendanceEvent>), AppError> {
    let event = state
        .session
        .lock()
        .await
        .record_check_in(&payload.name, payload.court, payload.team, payload.slot)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

#[axum::debug_handler]
pub async fn list_check_ins(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AttendanceResponse>, AppError> {
    let mut session = state.session.lock().await;
    let attendance = session.attendance().await?.to_vec();

    Ok(Json(AttendanceResponse { attendance }))
}
