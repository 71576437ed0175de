//! Shared API state and error response
//!
//! The error wire format is fixed: `{"error": "<message>"}` with HTTP 400
//! for validation failures and HTTP 500 for everything else. Client-facing
//! messages are Spanish; the underlying failure is logged and never sent
//! to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::services::ReportService;
use crate::web::TemplateEngine;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub pool: crate::db::DynDatabasePool,
    pub report_service: Arc<ReportService>,
    pub templates: Arc<TemplateEngine>,
}

/// Error response for API errors
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    /// 400 with a descriptive message; produced before any query runs
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// 500 with a fixed generic message; the real error goes to the log
    pub fn internal(message: impl Into<String>, source: anyhow::Error) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{}", message);
        Self {
            error: message,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Map a service error to the endpoint's wire error
///
/// `internal_message` is the endpoint's fixed 500 message (the original
/// dashboard had one per report).
pub fn map_service_error(
    err: crate::services::ReportServiceError,
    internal_message: &str,
) -> ApiError {
    match err {
        crate::services::ReportServiceError::Validation(msg) => ApiError::validation(msg),
        crate::services::ReportServiceError::Internal(source) => {
            ApiError::internal(internal_message, source)
        }
    }
}
