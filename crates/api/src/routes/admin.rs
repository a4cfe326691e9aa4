use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/logout", post(handlers::admin::logout))
        .route("/api/admin/assign", post(handlers::assignment::assign_teams))
        .route("/api/admin/reset", post(handlers::admin::reset))
        .route("/api/admin/reload", post(handlers::admin::reload))
        .route("/api/admin/absences", get(handlers::admin::list_absences))
        .route(
            "/api/admin/attendance.csv",
            get(handlers::admin::export_attendance),
        )
}
