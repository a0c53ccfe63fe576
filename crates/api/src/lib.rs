//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - Bearer-token authentication middleware
//! - Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use spendwise_shared::JwtService;
use spendwise_store::MemoryStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    pub store: MemoryStore,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
}

/// Request bodies above this size are rejected with 413.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Requests running longer than this are answered with 408.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
