//! Report row models and pagination types
//!
//! Each row struct mirrors one reporting view. Column names are kept
//! exactly as the views expose them (the views use Spanish business
//! terms), so the JSON the API returns matches what the database produces.

use serde::{Deserialize, Serialize};

/// One day of sales, from `vw_sales_daily`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDailyRow {
    /// Sale date, ISO-8601 (`YYYY-MM-DD`)
    pub sale_date: String,
    /// Number of completed orders that day
    pub tickets: i64,
    pub total_ventas: f64,
    pub ticket_promedio: f64,
    pub ventas_presencial: f64,
    pub ventas_digital: f64,
    pub pct_ventas_digital: f64,
}

/// Per-payment-method aggregate, from `vw_payment_mix`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMixRow {
    pub metodo_pago: String,
    pub num_transacciones: i64,
    pub total_recaudado: f64,
    pub pct_del_total: f64,
    pub ticket_promedio_pago: f64,
    pub pago_minimo: f64,
    pub pago_maximo: f64,
}

/// Low-stock product alert, from `vw_inventory_risk`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRiskRow {
    pub product_id: i64,
    pub nombre_producto: String,
    pub category_id: i64,
    pub categoria: String,
    pub stock_actual: i64,
    pub stock_promedio_categoria: f64,
    pub pct_vs_promedio_cat: f64,
    /// Risk tier label produced by the view (e.g. "SIN STOCK", "CRÍTICO")
    pub nivel_riesgo: String,
}

/// Customer lifetime-value aggregate, from `vw_customer_value`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerValueRow {
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub num_ordenes: i64,
    pub total_gastado: f64,
    pub gasto_promedio: f64,
    /// Last purchase date; NULL for customers with no completed orders
    pub ultima_compra: Option<String>,
    pub estado_cliente: String,
}

/// Product sales ranking, from `vw_top_products_ranked`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProductRow {
    pub product_id: i64,
    pub nombre_producto: String,
    pub categoria: String,
    pub precio_unitario: f64,
    pub total_unidades: i64,
    pub total_revenue: f64,
    pub precio_promedio_venta: f64,
    pub rank_revenue: i64,
    pub rank_unidades: i64,
}

/// Pagination parameters for list queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl ListParams {
    /// Create new pagination parameters
    ///
    /// `page` is floored to 1 and `per_page` clamped to [1, 50] uniformly,
    /// for every paginated report.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, 50),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> i64 {
        ((self.page.saturating_sub(1)) as i64) * (self.per_page as i64)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Paginated result container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

impl<T> PagedResult<T> {
    /// Create a new paginated result
    pub fn new(items: Vec<T>, total: i64, params: &ListParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }

    /// Calculate the total number of pages: `ceil(total / per_page)`
    ///
    /// An empty result set yields 0 pages.
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        ((self.total.max(0) as u64 + self.per_page as u64 - 1) / self.per_page as u64) as u32
    }

    /// Check if there is a next page
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Check if there is a previous page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if the result is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items in the current page
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            per_page: 10,
        }
    }
}
