//! Business logic services
//!
//! Validation and orchestration between the HTTP layer and the
//! repositories.

pub mod reports;

pub use reports::{ReportService, ReportServiceError};
