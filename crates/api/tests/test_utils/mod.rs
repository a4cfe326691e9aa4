#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use courtside_api::{
    ApiState, build_router,
    handlers::admin::{LoginRequest, LoginResponse},
    middleware::auth::{Argon2Credential, hash_password},
};
use courtside_core::{Stores, store::memory::MemoryStore};
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "shuttlecock";

// Hashing is slow in debug builds, so every test shares one hash.
fn admin_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).unwrap())
}

pub fn credential() -> Argon2Credential {
    Argon2Credential::new(admin_hash()).unwrap()
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub state: Arc<ApiState>,
    pub server: TestServer,
}

impl TestContext {
    /// Server backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        let state = Arc::new(ApiState::new(Stores::shared(store.clone()), credential()));
        let server = TestServer::new(build_router(state.clone())).unwrap();

        Self {
            store,
            state,
            server,
        }
    }

    pub async fn login(&self) -> Uuid {
        let response = self
            .server
            .post("/api/admin/login")
            .json(&LoginRequest {
                password: ADMIN_PASSWORD.to_string(),
            })
            .await;
        response.assert_status_ok();
        response.json::<LoginResponse>().token
    }

    pub async fn sign_up(&self, name: &str, slots: &[&str]) {
        self.server
            .post("/api/responses")
            .json(&serde_json::json!({
                "name": name,
                "attending": true,
                "slots": slots,
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }
}

/// Builds a router over arbitrary stores, such as mocks.
pub fn server_for(stores: Stores) -> (Arc<ApiState>, TestServer) {
    let state = Arc::new(ApiState::new(stores, credential()));
    let server = TestServer::new(build_router(state.clone())).unwrap();
    (state, server)
}

pub fn bearer(token: Uuid) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}
