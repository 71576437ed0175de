//! Database layer
//!
//! This module provides database access for the reporting dashboard.
//! It supports:
//! - SQLite (default, for single-binary deployment)
//! - MySQL (for shared deployments)
//!
//! The application owns no schema: every query is a read-only SELECT
//! against a pre-aggregated reporting view maintained by the database.
//! The driver is selected based on configuration.

pub mod pool;
pub mod query;
pub mod repositories;

pub use pool::{
    create_pool, create_test_pool, DatabasePool, DynDatabasePool, MysqlDatabase, SqliteDatabase,
};
pub use query::{FilterSet, FilterValue};
