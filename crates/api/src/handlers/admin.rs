//! # Admin Handlers
//!
//! Login and logout for the shared admin secret, plus the admin-only views
//! and maintenance operations. Every handler except `login` requires a bearer
//! token issued by `login`.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use courtside_core::models::participant::AbsencesResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, middleware::{auth::AdminToken, error_handling::AppError}};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Uuid,
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state.admin.write().await.login(&payload.password)?;

    Ok(Json(LoginResponse { token }))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<StatusCode, AppError> {
    let mut admin = state.admin.write().await;
    let grant = admin.grant(token)?;
    admin.logout(grant);

    Ok(StatusCode::NO_CONTENT)
}

/// Clears the working state. Stored rows are kept.
#[axum::debug_handler]
pub async fn reset(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<StatusCode, AppError> {
    let grant = state.admin.read().await.grant(token)?;
    state.session.lock().await.reset_all(&grant);

    Ok(StatusCode::NO_CONTENT)
}

/// Re-reads the stores on the next access.
#[axum::debug_handler]
pub async fn reload(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<StatusCode, AppError> {
    let grant = state.admin.read().await.grant(token)?;
    state.session.lock().await.reload(&grant);

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_absences(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<Json<AbsencesResponse>, AppError> {
    let grant = state.admin.read().await.grant(token)?;
    let mut session = state.session.lock().await;
    let absences = session.absences(&grant).await?.to_vec();

    Ok(Json(AbsencesResponse { absences }))
}

#[axum::debug_handler]
pub async fn export_attendance(
    State(state): State<Arc<ApiState>>,
    AdminToken(token): AdminToken,
) -> Result<Response, AppError> {
    let grant = state.admin.read().await.grant(token)?;
    let csv = state
        .session
        .lock()
        .await
        .export_attendance_csv(&grant)
        .await?;

    info!("Exported attendance ({} bytes)", csv.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"attendance.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
