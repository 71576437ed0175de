//! API layer - HTTP handlers and routing
//!
//! This module contains the HTTP API endpoints for the reporting service:
//! - Report API endpoints (sales, payment mix, inventory, customers, products)
//! - Shared state, error responses and pagination envelopes

pub mod middleware;
pub mod reports;
pub mod responses;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use middleware::{ApiError, AppState};

/// Build the API router
pub fn build_api_router() -> Router<AppState> {
    Router::new().nest("/reports", reports::router())
}

/// Build the complete router with middleware
///
/// Server-rendered pages live at the root; the JSON API under `/api`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(crate::web::router())
        .nest("/api", build_api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
