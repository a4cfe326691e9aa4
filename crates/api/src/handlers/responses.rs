//! # Response Handlers
//!
//! Sign-up form submissions and the public roster view.

use axum::{Json, extract::State, http::StatusCode};
use courtside_core::{
    Availability, Receipt,
    models::participant::{
        ParticipantsResponse, Slot, SubmitResponseRequest, SubmitResponseResponse,
    },
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Records whether someone is coming and for which slots, or why not.
#[axum::debug_handler]
pub async fn submit_response(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SubmitResponseRequest>,
) -> Result<(StatusCode, Json<SubmitResponseResponse>), AppError> {
    let availability = if payload.attending {
        Availability::Attending {
            slots: payload.slots.into_iter().collect(),
        }
    } else {
        Availability::Absent {
            reason: payload.reason.unwrap_or_default(),
        }
    };

    let receipt = state
        .session
        .lock()
        .await
        .submit_attendance(&payload.name, availability)
        .await?;

    let response = match receipt {
        Receipt::SignedUp(participant) => SubmitResponseResponse {
            id: Some(participant.id),
            name: participant.name,
            attending: true,
            submitted_at: participant.submitted_at,
        },
        Receipt::Absent(absence) => SubmitResponseResponse {
            id: None,
            name: absence.name,
            attending: false,
            submitted_at: absence.submitted_at,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists who signed up for each slot, in sign-up order.
#[axum::debug_handler]
pub async fn list_participants(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ParticipantsResponse>, AppError> {
    let mut session = state.session.lock().await;

    let response = ParticipantsResponse {
        before: session.names_for(Slot::Before).await?,
        after: session.names_for(Slot::After).await?,
    };

    Ok(Json(response))
}
