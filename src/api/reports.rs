//! Report API endpoints
//!
//! Handles the five read-only report queries:
//! - GET /api/reports/sales - daily sales, optional date range
//! - GET /api/reports/payment-mix - payment method aggregates
//! - GET /api/reports/inventory - low-stock products, paginated
//! - GET /api/reports/customers - customer value ranking, paginated
//! - GET /api/reports/products - product ranking with search, paginated
//!
//! Every handler follows the same shape: parse params, validate, run the
//! count and data queries through the service, and shape the JSON
//! envelope.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::middleware::{map_service_error, ApiError, AppState};
use crate::api::responses::{NestedPaginatedResponse, PaginatedResponse, SearchPaginatedResponse};
use crate::models::{
    CustomerValueRow, InventoryRiskRow, ListParams, PaymentMixRow, SalesDailyRow, TopProductRow,
};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// Query parameters for the sales report
#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Query parameters for the inventory report
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    /// Raw category filter; validated against the allow-list by the service
    pub category_id: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query parameters for the customers report
#[derive(Debug, Deserialize)]
pub struct CustomersQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query parameters for the products report
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Build the reports API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales", get(sales))
        .route("/payment-mix", get(payment_mix))
        .route("/inventory", get(inventory))
        .route("/customers", get(customers))
        .route("/products", get(products))
}

/// GET /api/reports/sales - daily sales rows, newest first
pub async fn sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<Vec<SalesDailyRow>>, ApiError> {
    let rows = state
        .report_service
        .sales_daily(query.date_from.as_deref(), query.date_to.as_deref())
        .await
        .map_err(|e| map_service_error(e, "Error al obtener ventas diarias"))?;

    Ok(Json(rows))
}

/// GET /api/reports/payment-mix - per-method aggregates
pub async fn payment_mix(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMixRow>>, ApiError> {
    let rows = state
        .report_service
        .payment_mix()
        .await
        .map_err(|e| map_service_error(e, "Error al obtener mix de pagos"))?;

    Ok(Json(rows))
}

/// GET /api/reports/inventory - paginated low-stock rows
pub async fn inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<NestedPaginatedResponse<InventoryRiskRow>>, ApiError> {
    let params = ListParams::new(query.page, query.limit);
    let page = state
        .report_service
        .inventory_risk(query.category_id.as_deref(), params)
        .await
        .map_err(|e| map_service_error(e, "Error al obtener inventario en riesgo"))?;

    Ok(Json(page.into()))
}

/// GET /api/reports/customers - paginated customer value ranking
pub async fn customers(
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> Result<Json<PaginatedResponse<CustomerValueRow>>, ApiError> {
    let params = ListParams::new(query.page, query.limit);
    let page = state
        .report_service
        .customer_value(params)
        .await
        .map_err(|e| map_service_error(e, "Error al obtener datos de clientes"))?;

    Ok(Json(page.into()))
}

/// GET /api/reports/products - paginated product ranking with search
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<SearchPaginatedResponse<TopProductRow>>, ApiError> {
    let params = ListParams::new(query.page, query.limit);
    let (page, search) = state
        .report_service
        .top_products(query.search.as_deref(), params)
        .await
        .map_err(|e| map_service_error(e, "Error al obtener productos"))?;

    Ok(Json(SearchPaginatedResponse::new(page, search)))
}
