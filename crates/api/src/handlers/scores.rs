//! # Score Handlers
//!
//! Score and partner entry for the courts of the current assignment. Neither
//! is written to a store; both are cleared by a reset.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use courtside_core::models::{
    assignment::CourtId,
    attendance::TeamLabel,
    participant::Slot,
    score::{PartnersResponse, RecordScoreRequest, ScoresResponse, SelectPartnersRequest},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Overwrites the score of one court. The text is stored as entered.
#[axum::debug_handler]
pub async fn record_score(
    State(state): State<Arc<ApiState>>,
    Path((slot, court)): Path<(Slot, CourtId)>,
    Json(payload): Json<RecordScoreRequest>,
) -> Result<Json<ScoresResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.record_court_score(slot, court, payload.score)?;

    Ok(Json(ScoresResponse {
        scores: session.scores().clone(),
    }))
}

#[axum::debug_handler]
pub async fn list_scores(State(state): State<Arc<ApiState>>) -> Json<ScoresResponse> {
    let session = state.session.lock().await;

    Json(ScoresResponse {
        scores: session.scores().clone(),
    })
}

#[axum::debug_handler]
pub async fn select_partners(
    State(state): State<Arc<ApiState>>,
    Path((slot, court, team)): Path<(Slot, CourtId, TeamLabel)>,
    Json(payload): Json<SelectPartnersRequest>,
) -> Result<StatusCode, AppError> {
    state
        .session
        .lock()
        .await
        .select_partners(slot, court, team, payload.members)?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_partners(State(state): State<Arc<ApiState>>) -> Json<PartnersResponse> {
    let session = state.session.lock().await;

    Json(PartnersResponse {
        partners: session.partners().clone(),
    })
}
