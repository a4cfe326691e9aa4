use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/responses", post(handlers::responses::submit_response))
        .route(
            "/api/participants",
            get(handlers::responses::list_participants),
        )
        .route("/api/assignment", get(handlers::assignment::get_assignment))
}
