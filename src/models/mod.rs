//! Data models
//!
//! This module contains the data structures used throughout the reporting
//! dashboard. Every report row mirrors a pre-aggregated database view; the
//! application never creates or mutates any of them. The only
//! application-owned types are the request-scoped pagination parameters
//! and result container.

mod report;

pub use report::{
    CustomerValueRow, InventoryRiskRow, ListParams, PagedResult, PaymentMixRow, SalesDailyRow,
    TopProductRow,
};
