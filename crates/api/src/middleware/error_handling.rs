//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courtside_core::errors::CourtError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a [`CourtError`] and implements `IntoResponse`, turning it
/// into a response with a matching status and a `{"error": message}` body.
#[derive(Debug)]
pub struct AppError(pub CourtError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CourtError::NotFound(_) => StatusCode::NOT_FOUND,
            CourtError::Validation(_) | CourtError::EmptyName => StatusCode::BAD_REQUEST,
            CourtError::AlreadyCheckedIn(_) => StatusCode::CONFLICT,
            CourtError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourtError::Authorization(_) => StatusCode::FORBIDDEN,
            CourtError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourtError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `CourtResult` inside handlers.
impl From<CourtError> for AppError {
    fn from(err: CourtError) -> Self {
        AppError(err)
    }
}

/// Store and infrastructure failures surfacing as `eyre::Report`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CourtError::Store(err))
    }
}

/// Maps a CourtError to an HTTP response
pub fn map_error(err: CourtError) -> Response {
    AppError(err).into_response()
}
