//! Reports repository
//!
//! Database operations for the five reporting views.
//!
//! This module provides:
//! - `ReportsRepository` trait defining the read-only report queries
//! - `SqlxReportsRepository` implementing the trait for SQLite and MySQL
//!
//! Paginated reports run two statements per request - a COUNT and a paged
//! SELECT - and both are compiled from the same `FilterSet`, so the count
//! always describes the same result set as the page.

use crate::config::DatabaseDriver;
use crate::db::query::{FilterSet, FilterValue};
use crate::db::{DatabasePool, DynDatabasePool};
use crate::models::{
    CustomerValueRow, InventoryRiskRow, ListParams, PaymentMixRow, SalesDailyRow, TopProductRow,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, Row, SqlitePool};
use std::sync::Arc;

/// Reports repository trait
#[async_trait]
pub trait ReportsRepository: Send + Sync {
    /// Daily sales rows, newest first, optionally restricted by a
    /// `sale_date` range filter
    async fn sales_daily(&self, filters: &FilterSet) -> Result<Vec<SalesDailyRow>>;

    /// Payment method aggregates, highest revenue first
    async fn payment_mix(&self) -> Result<Vec<PaymentMixRow>>;

    /// One page of inventory-risk rows, highest risk first
    async fn inventory_risk(
        &self,
        filters: &FilterSet,
        params: &ListParams,
    ) -> Result<Vec<InventoryRiskRow>>;

    /// Total inventory-risk rows matching the same filters
    async fn count_inventory_risk(&self, filters: &FilterSet) -> Result<i64>;

    /// One page of customer-value rows, biggest spenders first
    async fn customer_value(&self, params: &ListParams) -> Result<Vec<CustomerValueRow>>;

    /// Total customer-value rows
    async fn count_customer_value(&self) -> Result<i64>;

    /// One page of ranked products, best revenue rank first
    async fn top_products(
        &self,
        filters: &FilterSet,
        params: &ListParams,
    ) -> Result<Vec<TopProductRow>>;

    /// Total ranked products matching the same filters
    async fn count_top_products(&self, filters: &FilterSet) -> Result<i64>;
}

/// SQLx-based reports repository implementation
///
/// Supports both SQLite and MySQL databases.
pub struct SqlxReportsRepository {
    pool: DynDatabasePool,
}

impl SqlxReportsRepository {
    /// Create a new SQLx reports repository
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn ReportsRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ReportsRepository for SqlxReportsRepository {
    async fn sales_daily(&self, filters: &FilterSet) -> Result<Vec<SalesDailyRow>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                sales_daily_sqlite(self.pool.as_sqlite().unwrap(), filters).await
            }
            DatabaseDriver::Mysql => {
                sales_daily_mysql(self.pool.as_mysql().unwrap(), filters).await
            }
        }
    }

    async fn payment_mix(&self) -> Result<Vec<PaymentMixRow>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => payment_mix_sqlite(self.pool.as_sqlite().unwrap()).await,
            DatabaseDriver::Mysql => payment_mix_mysql(self.pool.as_mysql().unwrap()).await,
        }
    }

    async fn inventory_risk(
        &self,
        filters: &FilterSet,
        params: &ListParams,
    ) -> Result<Vec<InventoryRiskRow>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                inventory_risk_sqlite(self.pool.as_sqlite().unwrap(), filters, params).await
            }
            DatabaseDriver::Mysql => {
                inventory_risk_mysql(self.pool.as_mysql().unwrap(), filters, params).await
            }
        }
    }

    async fn count_inventory_risk(&self, filters: &FilterSet) -> Result<i64> {
        let sql = count_sql("vw_inventory_risk", filters);
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                count_sqlite(self.pool.as_sqlite().unwrap(), &sql, filters).await
            }
            DatabaseDriver::Mysql => count_mysql(self.pool.as_mysql().unwrap(), &sql, filters).await,
        }
    }

    async fn customer_value(&self, params: &ListParams) -> Result<Vec<CustomerValueRow>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                customer_value_sqlite(self.pool.as_sqlite().unwrap(), params).await
            }
            DatabaseDriver::Mysql => {
                customer_value_mysql(self.pool.as_mysql().unwrap(), params).await
            }
        }
    }

    async fn count_customer_value(&self) -> Result<i64> {
        let filters = FilterSet::new();
        let sql = count_sql("vw_customer_value", &filters);
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                count_sqlite(self.pool.as_sqlite().unwrap(), &sql, &filters).await
            }
            DatabaseDriver::Mysql => {
                count_mysql(self.pool.as_mysql().unwrap(), &sql, &filters).await
            }
        }
    }

    async fn top_products(
        &self,
        filters: &FilterSet,
        params: &ListParams,
    ) -> Result<Vec<TopProductRow>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                top_products_sqlite(self.pool.as_sqlite().unwrap(), filters, params).await
            }
            DatabaseDriver::Mysql => {
                top_products_mysql(self.pool.as_mysql().unwrap(), filters, params).await
            }
        }
    }

    async fn count_top_products(&self, filters: &FilterSet) -> Result<i64> {
        let sql = count_sql("vw_top_products_ranked", filters);
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                count_sqlite(self.pool.as_sqlite().unwrap(), &sql, filters).await
            }
            DatabaseDriver::Mysql => count_mysql(self.pool.as_mysql().unwrap(), &sql, filters).await,
        }
    }
}

// ============================================================================
// SQL text assembly
// ============================================================================

fn count_sql(view: &str, filters: &FilterSet) -> String {
    format!("SELECT COUNT(*) AS count FROM {}{}", view, filters.where_clause())
}

fn sales_sql(filters: &FilterSet) -> String {
    format!(
        "SELECT sale_date, tickets, total_ventas, ticket_promedio, \
         ventas_presencial, ventas_digital, pct_ventas_digital \
         FROM vw_sales_daily{} ORDER BY sale_date DESC",
        filters.where_clause()
    )
}

const PAYMENT_MIX_SQL: &str = "SELECT metodo_pago, num_transacciones, total_recaudado, \
     pct_del_total, ticket_promedio_pago, pago_minimo, pago_maximo \
     FROM vw_payment_mix ORDER BY total_recaudado DESC";

fn inventory_sql(filters: &FilterSet) -> String {
    format!(
        "SELECT product_id, nombre_producto, category_id, categoria, stock_actual, \
         stock_promedio_categoria, pct_vs_promedio_cat, nivel_riesgo \
         FROM vw_inventory_risk{} ORDER BY nivel_riesgo DESC LIMIT ? OFFSET ?",
        filters.where_clause()
    )
}

const CUSTOMER_VALUE_SQL: &str = "SELECT customer_id, customer_name, customer_email, num_ordenes, \
     total_gastado, gasto_promedio, ultima_compra, estado_cliente \
     FROM vw_customer_value ORDER BY total_gastado DESC LIMIT ? OFFSET ?";

fn products_sql(filters: &FilterSet) -> String {
    format!(
        "SELECT product_id, nombre_producto, categoria, precio_unitario, total_unidades, \
         total_revenue, precio_promedio_venta, rank_revenue, rank_unidades \
         FROM vw_top_products_ranked{} ORDER BY rank_revenue LIMIT ? OFFSET ?",
        filters.where_clause()
    )
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn sales_daily_sqlite(pool: &SqlitePool, filters: &FilterSet) -> Result<Vec<SalesDailyRow>> {
    let sql = sales_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .fetch_all(pool)
        .await
        .context("Failed to query vw_sales_daily")?;

    rows.iter().map(row_to_sales_sqlite).collect()
}

async fn payment_mix_sqlite(pool: &SqlitePool) -> Result<Vec<PaymentMixRow>> {
    let rows = sqlx::query(PAYMENT_MIX_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to query vw_payment_mix")?;

    rows.iter().map(row_to_payment_mix_sqlite).collect()
}

async fn inventory_risk_sqlite(
    pool: &SqlitePool,
    filters: &FilterSet,
    params: &ListParams,
) -> Result<Vec<InventoryRiskRow>> {
    let sql = inventory_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_inventory_risk")?;

    rows.iter().map(row_to_inventory_sqlite).collect()
}

async fn customer_value_sqlite(
    pool: &SqlitePool,
    params: &ListParams,
) -> Result<Vec<CustomerValueRow>> {
    let rows = sqlx::query(CUSTOMER_VALUE_SQL)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_customer_value")?;

    rows.iter().map(row_to_customer_sqlite).collect()
}

async fn top_products_sqlite(
    pool: &SqlitePool,
    filters: &FilterSet,
    params: &ListParams,
) -> Result<Vec<TopProductRow>> {
    let sql = products_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_top_products_ranked")?;

    rows.iter().map(row_to_product_sqlite).collect()
}

async fn count_sqlite(pool: &SqlitePool, sql: &str, filters: &FilterSet) -> Result<i64> {
    let mut query = sqlx::query(sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let row = query
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to run count query: {}", sql))?;
    row.try_get("count").context("Failed to read count column")
}

fn row_to_sales_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<SalesDailyRow> {
    Ok(SalesDailyRow {
        sale_date: row.try_get("sale_date")?,
        tickets: row.try_get("tickets")?,
        total_ventas: row.try_get("total_ventas")?,
        ticket_promedio: row.try_get("ticket_promedio")?,
        ventas_presencial: row.try_get("ventas_presencial")?,
        ventas_digital: row.try_get("ventas_digital")?,
        pct_ventas_digital: row.try_get("pct_ventas_digital")?,
    })
}

fn row_to_payment_mix_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<PaymentMixRow> {
    Ok(PaymentMixRow {
        metodo_pago: row.try_get("metodo_pago")?,
        num_transacciones: row.try_get("num_transacciones")?,
        total_recaudado: row.try_get("total_recaudado")?,
        pct_del_total: row.try_get("pct_del_total")?,
        ticket_promedio_pago: row.try_get("ticket_promedio_pago")?,
        pago_minimo: row.try_get("pago_minimo")?,
        pago_maximo: row.try_get("pago_maximo")?,
    })
}

fn row_to_inventory_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<InventoryRiskRow> {
    Ok(InventoryRiskRow {
        product_id: row.try_get("product_id")?,
        nombre_producto: row.try_get("nombre_producto")?,
        category_id: row.try_get("category_id")?,
        categoria: row.try_get("categoria")?,
        stock_actual: row.try_get("stock_actual")?,
        stock_promedio_categoria: row.try_get("stock_promedio_categoria")?,
        pct_vs_promedio_cat: row.try_get("pct_vs_promedio_cat")?,
        nivel_riesgo: row.try_get("nivel_riesgo")?,
    })
}

fn row_to_customer_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<CustomerValueRow> {
    Ok(CustomerValueRow {
        customer_id: row.try_get("customer_id")?,
        customer_name: row.try_get("customer_name")?,
        customer_email: row.try_get("customer_email")?,
        num_ordenes: row.try_get("num_ordenes")?,
        total_gastado: row.try_get("total_gastado")?,
        gasto_promedio: row.try_get("gasto_promedio")?,
        ultima_compra: row.try_get("ultima_compra")?,
        estado_cliente: row.try_get("estado_cliente")?,
    })
}

fn row_to_product_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<TopProductRow> {
    Ok(TopProductRow {
        product_id: row.try_get("product_id")?,
        nombre_producto: row.try_get("nombre_producto")?,
        categoria: row.try_get("categoria")?,
        precio_unitario: row.try_get("precio_unitario")?,
        total_unidades: row.try_get("total_unidades")?,
        total_revenue: row.try_get("total_revenue")?,
        precio_promedio_venta: row.try_get("precio_promedio_venta")?,
        rank_revenue: row.try_get("rank_revenue")?,
        rank_unidades: row.try_get("rank_unidades")?,
    })
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn sales_daily_mysql(pool: &MySqlPool, filters: &FilterSet) -> Result<Vec<SalesDailyRow>> {
    let sql = sales_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .fetch_all(pool)
        .await
        .context("Failed to query vw_sales_daily")?;

    rows.iter().map(row_to_sales_mysql).collect()
}

async fn payment_mix_mysql(pool: &MySqlPool) -> Result<Vec<PaymentMixRow>> {
    let rows = sqlx::query(PAYMENT_MIX_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to query vw_payment_mix")?;

    rows.iter().map(row_to_payment_mix_mysql).collect()
}

async fn inventory_risk_mysql(
    pool: &MySqlPool,
    filters: &FilterSet,
    params: &ListParams,
) -> Result<Vec<InventoryRiskRow>> {
    let sql = inventory_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_inventory_risk")?;

    rows.iter().map(row_to_inventory_mysql).collect()
}

async fn customer_value_mysql(
    pool: &MySqlPool,
    params: &ListParams,
) -> Result<Vec<CustomerValueRow>> {
    let rows = sqlx::query(CUSTOMER_VALUE_SQL)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_customer_value")?;

    rows.iter().map(row_to_customer_mysql).collect()
}

async fn top_products_mysql(
    pool: &MySqlPool,
    filters: &FilterSet,
    params: &ListParams,
) -> Result<Vec<TopProductRow>> {
    let sql = products_sql(filters);
    let mut query = sqlx::query(&sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let rows = query
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(pool)
        .await
        .context("Failed to query vw_top_products_ranked")?;

    rows.iter().map(row_to_product_mysql).collect()
}

async fn count_mysql(pool: &MySqlPool, sql: &str, filters: &FilterSet) -> Result<i64> {
    let mut query = sqlx::query(sql);
    for value in filters.values() {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(s) => query.bind(s.as_str()),
        };
    }
    let row = query
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to run count query: {}", sql))?;
    row.try_get("count").context("Failed to read count column")
}

fn row_to_sales_mysql(row: &sqlx::mysql::MySqlRow) -> Result<SalesDailyRow> {
    Ok(SalesDailyRow {
        sale_date: row.try_get("sale_date")?,
        tickets: row.try_get("tickets")?,
        total_ventas: row.try_get("total_ventas")?,
        ticket_promedio: row.try_get("ticket_promedio")?,
        ventas_presencial: row.try_get("ventas_presencial")?,
        ventas_digital: row.try_get("ventas_digital")?,
        pct_ventas_digital: row.try_get("pct_ventas_digital")?,
    })
}

fn row_to_payment_mix_mysql(row: &sqlx::mysql::MySqlRow) -> Result<PaymentMixRow> {
    Ok(PaymentMixRow {
        metodo_pago: row.try_get("metodo_pago")?,
        num_transacciones: row.try_get("num_transacciones")?,
        total_recaudado: row.try_get("total_recaudado")?,
        pct_del_total: row.try_get("pct_del_total")?,
        ticket_promedio_pago: row.try_get("ticket_promedio_pago")?,
        pago_minimo: row.try_get("pago_minimo")?,
        pago_maximo: row.try_get("pago_maximo")?,
    })
}

fn row_to_inventory_mysql(row: &sqlx::mysql::MySqlRow) -> Result<InventoryRiskRow> {
    Ok(InventoryRiskRow {
        product_id: row.try_get("product_id")?,
        nombre_producto: row.try_get("nombre_producto")?,
        category_id: row.try_get("category_id")?,
        categoria: row.try_get("categoria")?,
        stock_actual: row.try_get("stock_actual")?,
        stock_promedio_categoria: row.try_get("stock_promedio_categoria")?,
        pct_vs_promedio_cat: row.try_get("pct_vs_promedio_cat")?,
        nivel_riesgo: row.try_get("nivel_riesgo")?,
    })
}

fn row_to_customer_mysql(row: &sqlx::mysql::MySqlRow) -> Result<CustomerValueRow> {
    Ok(CustomerValueRow {
        customer_id: row.try_get("customer_id")?,
        customer_name: row.try_get("customer_name")?,
        customer_email: row.try_get("customer_email")?,
        num_ordenes: row.try_get("num_ordenes")?,
        total_gastado: row.try_get("total_gastado")?,
        gasto_promedio: row.try_get("gasto_promedio")?,
        ultima_compra: row.try_get("ultima_compra")?,
        estado_cliente: row.try_get("estado_cliente")?,
    })
}

fn row_to_product_mysql(row: &sqlx::mysql::MySqlRow) -> Result<TopProductRow> {
    Ok(TopProductRow {
        product_id: row.try_get("product_id")?,
        nombre_producto: row.try_get("nombre_producto")?,
        categoria: row.try_get("categoria")?,
        precio_unitario: row.try_get("precio_unitario")?,
        total_unidades: row.try_get("total_unidades")?,
        total_revenue: row.try_get("total_revenue")?,
        precio_promedio_venta: row.try_get("precio_promedio_venta")?,
        rank_revenue: row.try_get("rank_revenue")?,
        rank_unidades: row.try_get("rank_unidades")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::db::repositories::fixtures;

    #[tokio::test]
    async fn test_sales_daily_unfiltered_orders_newest_first() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_sales(&pool, &["2024-06-01", "2024-06-03", "2024-06-02"]).await;

        let repo = SqlxReportsRepository::new(pool);
        let rows = repo.sales_daily(&FilterSet::new()).await.unwrap();

        let dates: Vec<_> = rows.iter().map(|r| r.sale_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-03", "2024-06-02", "2024-06-01"]);
    }

    #[tokio::test]
    async fn test_sales_daily_date_range_filter() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_sales(&pool, &["2024-06-01", "2024-06-10", "2024-06-20"]).await;

        let repo = SqlxReportsRepository::new(pool);
        let filters = FilterSet::new()
            .gte_text("sale_date", "2024-06-05".to_string())
            .lte_text("sale_date", "2024-06-15".to_string());
        let rows = repo.sales_daily(&filters).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sale_date, "2024-06-10");
    }

    #[tokio::test]
    async fn test_payment_mix_ordered_by_revenue() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_payment_mix(&pool, &[("efectivo", 500.0), ("tarjeta", 1200.0)]).await;

        let repo = SqlxReportsRepository::new(pool);
        let rows = repo.payment_mix().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metodo_pago, "tarjeta");
        assert_eq!(rows[1].metodo_pago, "efectivo");
    }

    #[tokio::test]
    async fn test_inventory_category_filter_returns_only_that_category() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_inventory_counts(&pool, &[(1, 4), (2, 3)]).await;

        let repo = SqlxReportsRepository::new(pool);
        let filters = FilterSet::new().eq_int("category_id", 2);
        let rows = repo
            .inventory_risk(&filters, &ListParams::new(1, 50))
            .await
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.category_id == 2));
        assert_eq!(repo.count_inventory_risk(&filters).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_customer_value_pagination_boundaries() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_customers(&pool, 23).await;

        let repo = SqlxReportsRepository::new(pool);
        assert_eq!(repo.count_customer_value().await.unwrap(), 23);

        let page1 = repo.customer_value(&ListParams::new(1, 10)).await.unwrap();
        assert_eq!(page1.len(), 10);

        let page3 = repo.customer_value(&ListParams::new(3, 10)).await.unwrap();
        assert_eq!(page3.len(), 3);

        let page4 = repo.customer_value(&ListParams::new(4, 10)).await.unwrap();
        assert!(page4.is_empty());
    }

    #[tokio::test]
    async fn test_customer_value_ordered_by_spend() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_customers(&pool, 5).await;

        let repo = SqlxReportsRepository::new(pool);
        let rows = repo.customer_value(&ListParams::new(1, 10)).await.unwrap();

        for pair in rows.windows(2) {
            assert!(pair[0].total_gastado >= pair[1].total_gastado);
        }
    }

    #[tokio::test]
    async fn test_top_products_search_is_case_insensitive() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_products(&pool, &["Latte Grande", "Espresso", "Latte Chico"]).await;

        let repo = SqlxReportsRepository::new(pool);
        let filters = FilterSet::new().contains("nombre_producto", "latte");
        let rows = repo
            .top_products(&filters, &ListParams::new(1, 10))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(repo.count_top_products(&filters).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_top_products_no_match_is_empty() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_products(&pool, &["Espresso"]).await;

        let repo = SqlxReportsRepository::new(pool);
        let filters = FilterSet::new().contains("nombre_producto", "croissant");
        let rows = repo
            .top_products(&filters, &ListParams::new(1, 10))
            .await
            .unwrap();

        assert!(rows.is_empty());
        assert_eq!(repo.count_top_products(&filters).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_top_products_ordered_by_rank() {
        let pool = create_test_pool().await.unwrap();
        fixtures::create_report_views(&pool).await;
        fixtures::seed_products(&pool, &["C", "A", "B"]).await;

        let repo = SqlxReportsRepository::new(pool);
        let rows = repo
            .top_products(&FilterSet::new(), &ListParams::new(1, 10))
            .await
            .unwrap();

        for pair in rows.windows(2) {
            assert!(pair[0].rank_revenue <= pair[1].rank_revenue);
        }
    }
}
