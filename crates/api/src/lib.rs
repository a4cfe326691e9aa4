//! # Courtside API
//!
//! The API crate provides the web server for the lunchtime badminton tracker.
//! It exposes sign-up, check-in, scoring and admin endpoints over one shared
//! session.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into session operations
//! - **Middleware**: Admin token extraction and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! All requests touching the working state go through one mutex, so writes are
//! applied one at a time and the last assignment run wins.

/// Configuration module for API settings
pub mod config;
/// Request handlers that drive the session
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
};
use courtside_core::{AdminGate, Session, Stores, store::memory::MemoryStore};
use courtside_db::{PgStore, create_pool, schema::initialize_database};
use eyre::Result;
use tokio::{
    net::TcpListener,
    sync::{Mutex, RwLock},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::auth::Argon2Credential;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Working copy of the roster, attendance and assignment
    pub session: Mutex<Session>,
    /// Admin tokens issued by the login endpoint
    pub admin: RwLock<AdminGate>,
}

impl ApiState {
    pub fn new(stores: Stores, credential: Argon2Credential) -> Self {
        Self {
            session: Mutex::new(Session::new(stores)),
            admin: RwLock::new(AdminGate::new(credential)),
        }
    }
}

/// Opens the configured stores: PostgreSQL when `DATABASE_URL` is set,
/// otherwise a process-local store that is lost on restart.
pub async fn connect_stores(config: &config::ApiConfig) -> Result<Stores> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            initialize_database(&pool).await?;
            info!("Using PostgreSQL store");
            Ok(Stores::shared(Arc::new(PgStore::new(pool))))
        }
        None => {
            warn!("DATABASE_URL not set; sign-ups and check-ins are kept in memory only");
            Ok(Stores::shared(Arc::new(MemoryStore::new())))
        }
    }
}

/// Builds the router with every endpoint attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Sign-up and roster endpoints
        .merge(routes::responses::routes())
        // Check-in endpoints
        .merge(routes::attendance::routes())
        // Score and partner endpoints
        .merge(routes::scores::routes())
        // Admin endpoints
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and stores
pub async fn start_server(config: config::ApiConfig, stores: Stores) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let credential = Argon2Credential::new(config.admin_password_hash.clone())?;
    let state = Arc::new(ApiState::new(stores, credential));

    let app = build_router(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| match origin.parse::<HeaderValue>() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            warn!("Ignoring invalid CORS origin {}", origin);
                            None
                        }
                    })
                    .collect::<Vec<HeaderValue>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
