//! Shared API response envelopes
//!
//! Field casing (`totalPages`) is part of the wire contract inherited from
//! the original dashboard, so the envelopes keep it even though the rest
//! of the crate is snake_case.
//!
//! The inventory report uses a nested `pagination` object; the customer
//! and product reports inline the same fields. Both shapes derive from the
//! same `PagedResult`.

use serde::Serialize;

use crate::models::PagedResult;

/// Flat paginated envelope: `{data, total, page, limit, totalPages}`
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> From<PagedResult<T>> for PaginatedResponse<T> {
    fn from(result: PagedResult<T>) -> Self {
        let total_pages = result.total_pages();
        Self {
            data: result.items,
            total: result.total,
            page: result.page,
            limit: result.per_page,
            total_pages,
        }
    }
}

/// Flat paginated envelope that also echoes the sanitized search term
#[derive(Debug, Serialize)]
pub struct SearchPaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub search: Option<String>,
}

impl<T> SearchPaginatedResponse<T> {
    pub fn new(result: PagedResult<T>, search: Option<String>) -> Self {
        let total_pages = result.total_pages();
        Self {
            data: result.items,
            total: result.total,
            page: result.page,
            limit: result.per_page,
            total_pages,
            search,
        }
    }
}

/// Nested envelope used by the inventory report:
/// `{data, pagination: {total, page, limit, totalPages}}`
#[derive(Debug, Serialize)]
pub struct NestedPaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata block
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> From<PagedResult<T>> for NestedPaginatedResponse<T> {
    fn from(result: PagedResult<T>) -> Self {
        let total_pages = result.total_pages();
        Self {
            pagination: PaginationMeta {
                total: result.total,
                page: result.page,
                limit: result.per_page,
                total_pages,
            },
            data: result.items,
        }
    }
}
