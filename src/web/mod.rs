//! Server-rendered dashboard pages
//!
//! The pages call the report service directly (no HTTP round-trip through
//! the JSON API) and render Tera templates with tables, KPI cards and
//! filter forms.

pub mod pages;
pub mod templates;

use axum::{routing::get, Router};

use crate::api::middleware::AppState;

pub use templates::{TemplateEngine, TemplateError};

/// Build the dashboard page router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/reports/sales", get(pages::sales))
        .route("/reports/payment-mix", get(pages::payment_mix))
        .route("/reports/inventory", get(pages::inventory))
        .route("/reports/customers", get(pages::customers))
        .route("/reports/products", get(pages::products))
}
