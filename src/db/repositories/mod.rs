//! Repository layer
//!
//! Data access for the reporting views. Every operation is a read-only
//! SELECT; the repository owns no schema and performs no writes.

mod reports;

pub use reports::{ReportsRepository, SqlxReportsRepository};

#[cfg(test)]
pub mod fixtures;
