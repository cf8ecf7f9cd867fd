//! HTTP API server for analytics-log.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]

mod api_error;
mod blocking;
mod body;
mod handlers;
mod response_types;

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use analytics_log_service::CollectionService;

pub use response_types::HealthResponse;

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Append/list operations over the stored document
    pub collections: CollectionService,
}

impl AppState {
    #[must_use]
    pub fn new(collections: CollectionService) -> Self {
        Self { collections }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/activity",
            get(handlers::records::list_activity).post(handlers::records::create_activity),
        )
        .route(
            "/api/searches",
            get(handlers::records::list_searches).post(handlers::records::create_search),
        )
        .route(
            "/api/learnings",
            get(handlers::records::list_learnings).post(handlers::records::create_learning),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(build_cors_layer())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Any origin, common methods, and whatever headers the preflight asks for.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
