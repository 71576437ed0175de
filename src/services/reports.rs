//! Report service
//!
//! Implements the paginated view reader that every endpoint is a
//! parameterization of: validate the request parameters, compile a filter
//! set, run the count query and the data query with the same bindings, and
//! return a page of rows.
//!
//! All validation happens before any query executes; an invalid category
//! or malformed date never reaches the database.

use crate::db::query::FilterSet;
use crate::db::repositories::ReportsRepository;
use crate::models::{
    CustomerValueRow, InventoryRiskRow, ListParams, PagedResult, PaymentMixRow, SalesDailyRow,
    TopProductRow,
};
use anyhow::Context;
use chrono::NaiveDate;
use std::sync::Arc;

/// Allowed product categories for the inventory filter
const ALLOWED_CATEGORIES: [i64; 4] = [1, 2, 3, 4];

/// Error types for report service operations
///
/// Validation messages are client-facing and stay in Spanish, matching the
/// wire contract of the API.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    /// Request parameter failed validation
    #[error("{0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Report service over the five reporting views
pub struct ReportService {
    repo: Arc<dyn ReportsRepository>,
}

impl ReportService {
    /// Create a new report service
    pub fn new(repo: Arc<dyn ReportsRepository>) -> Self {
        Self { repo }
    }

    /// Daily sales, optionally restricted to a date range
    ///
    /// Both bounds are optional; each must be a valid `YYYY-MM-DD` date.
    pub async fn sales_daily(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Vec<SalesDailyRow>, ReportServiceError> {
        let mut filters = FilterSet::new();
        if let Some(from) = date_from {
            validate_date(from, "date_from")?;
            filters = filters.gte_text("sale_date", from.to_string());
        }
        if let Some(to) = date_to {
            validate_date(to, "date_to")?;
            filters = filters.lte_text("sale_date", to.to_string());
        }

        let rows = self
            .repo
            .sales_daily(&filters)
            .await
            .context("Failed to load daily sales")?;
        Ok(rows)
    }

    /// Payment method mix, highest revenue first
    pub async fn payment_mix(&self) -> Result<Vec<PaymentMixRow>, ReportServiceError> {
        let rows = self
            .repo
            .payment_mix()
            .await
            .context("Failed to load payment mix")?;
        Ok(rows)
    }

    /// One page of inventory-risk rows, optionally for a single category
    ///
    /// `category_id` arrives as the raw query-string value; anything that
    /// is not one of the four known categories is rejected.
    pub async fn inventory_risk(
        &self,
        category_id: Option<&str>,
        params: ListParams,
    ) -> Result<PagedResult<InventoryRiskRow>, ReportServiceError> {
        let mut filters = FilterSet::new();
        if let Some(raw) = category_id {
            let id = parse_category(raw)?;
            filters = filters.eq_int("category_id", id);
        }

        let total = self
            .repo
            .count_inventory_risk(&filters)
            .await
            .context("Failed to count inventory risk rows")?;
        let rows = self
            .repo
            .inventory_risk(&filters, &params)
            .await
            .context("Failed to load inventory risk rows")?;

        Ok(PagedResult::new(rows, total, &params))
    }

    /// One page of customer-value rows, biggest spenders first
    pub async fn customer_value(
        &self,
        params: ListParams,
    ) -> Result<PagedResult<CustomerValueRow>, ReportServiceError> {
        let total = self
            .repo
            .count_customer_value()
            .await
            .context("Failed to count customers")?;
        let rows = self
            .repo
            .customer_value(&params)
            .await
            .context("Failed to load customer value rows")?;

        Ok(PagedResult::new(rows, total, &params))
    }

    /// One page of ranked products, optionally matching a search term
    ///
    /// Returns the page and the sanitized term that was actually used (the
    /// API echoes it back). A term that is empty after sanitizing applies
    /// no filter.
    pub async fn top_products(
        &self,
        search: Option<&str>,
        params: ListParams,
    ) -> Result<(PagedResult<TopProductRow>, Option<String>), ReportServiceError> {
        let term = search.map(sanitize_search).filter(|t| !t.is_empty());

        let mut filters = FilterSet::new();
        if let Some(ref term) = term {
            filters = filters.contains("nombre_producto", term);
        }

        let total = self
            .repo
            .count_top_products(&filters)
            .await
            .context("Failed to count products")?;
        let rows = self
            .repo
            .top_products(&filters, &params)
            .await
            .context("Failed to load product ranking")?;

        Ok((PagedResult::new(rows, total, &params), term))
    }
}

/// Validate a `YYYY-MM-DD` date parameter
fn validate_date(value: &str, field: &str) -> Result<(), ReportServiceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ReportServiceError::Validation(format!(
            "Formato invalido en {}. Use YYYY-MM-DD",
            field
        ))
    })?;
    Ok(())
}

/// Parse and allow-list the category filter
fn parse_category(raw: &str) -> Result<i64, ReportServiceError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| ALLOWED_CATEGORIES.contains(id))
        .ok_or_else(|| {
            ReportServiceError::Validation(
                "Categoría inválida. Valores permitidos: 1, 2, 3, 4".to_string(),
            )
        })
}

/// Strip everything except alphanumerics, spaces and underscores, then trim
fn sanitize_search(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::db::repositories::{fixtures, SqlxReportsRepository};
    use anyhow::Result;
    use async_trait::async_trait;

    /// Repository double that panics if any query runs; used to prove
    /// validation happens first.
    struct NoQueryRepo;

    #[async_trait]
    impl ReportsRepository for NoQueryRepo {
        async fn sales_daily(&self, _: &FilterSet) -> Result<Vec<SalesDailyRow>> {
            panic!("query executed despite invalid input");
        }
        async fn payment_mix(&self) -> Result<Vec<PaymentMixRow>> {
            panic!("query executed despite invalid input");
        }
        async fn inventory_risk(
            &self,
            _: &FilterSet,
            _: &ListParams,
        ) -> Result<Vec<InventoryRiskRow>> {
            panic!("query executed despite invalid input");
        }
        async fn count_inventory_risk(&self, _: &FilterSet) -> Result<i64> {
            panic!("query executed despite invalid input");
        }
        async fn customer_value(&self, _: &ListParams) -> Result<Vec<CustomerValueRow>> {
            panic!("query executed despite invalid input");
        }
        async fn count_customer_value(&self) -> Result<i64> {
            panic!("query executed despite invalid input");
        }
        async fn top_products(&self, _: &FilterSet, _: &ListParams) -> Result<Vec<TopProductRow>> {
            panic!("query executed despite invalid input");
        }
        async fn count_top_products(&self, _: &FilterSet) -> Result<i64> {
            panic!("query executed despite invalid input");
        }
    }

    async fn service_with_fixtures() -> ReportService {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_sales(&pool, &["2024-06-01", "2024-06-02"]).await;
        fixtures::seed_inventory_counts(&pool, &[(1, 2), (3, 1)]).await;
        fixtures::seed_customers(&pool, 23).await;
        fixtures::seed_products(&pool, &["Latte", "Espresso"]).await;
        ReportService::new(SqlxReportsRepository::boxed(pool))
    }

    #[tokio::test]
    async fn test_invalid_date_from_rejected_before_query() {
        let service = ReportService::new(Arc::new(NoQueryRepo));
        let err = service
            .sales_daily(Some("01-06-2024"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ReportServiceError::Validation(_)));
        assert!(err.to_string().contains("date_from"));
    }

    #[tokio::test]
    async fn test_invalid_date_to_rejected_before_query() {
        let service = ReportService::new(Arc::new(NoQueryRepo));
        let err = service
            .sales_daily(None, Some("2024-13-99"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReportServiceError::Validation(_)));
        assert!(err.to_string().contains("date_to"));
    }

    #[tokio::test]
    async fn test_invalid_category_rejected_before_query() {
        let service = ReportService::new(Arc::new(NoQueryRepo));
        for bad in ["5", "0", "-1", "abc", ""] {
            let err = service
                .inventory_risk(Some(bad), ListParams::default())
                .await
                .unwrap_err();
            assert!(matches!(err, ReportServiceError::Validation(_)), "{}", bad);
        }
    }

    #[tokio::test]
    async fn test_valid_categories_accepted() {
        let service = service_with_fixtures().await;
        for good in ["1", "2", "3", "4"] {
            let result = service
                .inventory_risk(Some(good), ListParams::default())
                .await;
            assert!(result.is_ok(), "{}", good);
        }
    }

    #[tokio::test]
    async fn test_category_filter_restricts_rows() {
        let service = service_with_fixtures().await;
        let page = service
            .inventory_risk(Some("1"), ListParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|r| r.category_id == 1));
    }

    #[tokio::test]
    async fn test_sales_date_range_applied() {
        let service = service_with_fixtures().await;
        let rows = service
            .sales_daily(Some("2024-06-02"), None)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sale_date, "2024-06-02");
    }

    #[tokio::test]
    async fn test_customer_value_total_pages() {
        let service = service_with_fixtures().await;
        let page = service
            .customer_value(ListParams::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.len(), 10);
    }

    #[tokio::test]
    async fn test_search_term_sanitized_and_echoed() {
        let service = service_with_fixtures().await;
        let (page, term) = service
            .top_products(Some("latte';--"), ListParams::default())
            .await
            .unwrap();
        assert_eq!(term.as_deref(), Some("latte"));
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_search_only_symbols_means_no_filter() {
        let service = service_with_fixtures().await;
        let (page, term) = service
            .top_products(Some("!@#$%"), ListParams::default())
            .await
            .unwrap();
        assert_eq!(term, None);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_search_no_match_yields_empty_page() {
        let service = service_with_fixtures().await;
        let (page, _) = service
            .top_products(Some("croissant"), ListParams::default())
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_sanitize_search_keeps_words() {
        assert_eq!(sanitize_search("  cafe latte "), "cafe latte");
        assert_eq!(sanitize_search("te' OR 1=1"), "te OR 11");
        assert_eq!(sanitize_search("%;--"), "");
    }
}
