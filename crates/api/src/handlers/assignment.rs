use axum::{Json, extract::State};
use courtside_core::models::assignment::{Assignment, AssignmentResponse};
use std::sync::Arc;

use crate::{ApiState, middleware::{auth::AdminToken, error_handling::AppError}};

/// Current courts and waitlist; `null` until an admin runs an assignment.
#[axum::debug_handler]
pub async fn get_assignment(State(state): State<Arc<ApiState>>) -> Json<AssignmentResponse> {
    let session = state.session.lock().await;

    Json(AssignmentResponse {
        assignment: session.assignment().cloned(),
    })
}

/// Re-partitions both slots from the current roster, replacing the old courts.
#[axum::debug_handler]
pub async fn assign_teams(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<Json<Assignment>, AppError> {
    let grant = state.admin.read().await.grant(token)?;

    let mut session = state.session.lock().await;
    let assignment = session.assign_teams(&grant).await?.clone();

    Ok(Json(assignment))
}
