use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/check-ins",
        get(handlers::attendance::list_check_ins).post(handlers::attendance::check_in),
    )
}
