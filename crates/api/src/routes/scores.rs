use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/scores", get(handlers::scores::list_scores))
        .route(
            "/api/scores/:slot/:court",
            put(handlers::scores::record_score),
        )
        .route("/api/partners", get(handlers::scores::list_partners))
        .route(
            "/api/partners/:slot/:court/:team",
            put(handlers::scores::select_partners),
        )
}
