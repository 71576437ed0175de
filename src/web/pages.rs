//! Dashboard page handlers
//!
//! Each handler mirrors one report endpoint: it runs the same service
//! call, computes the KPI cards for the rendered rows, and renders the
//! page template. Invalid filter input renders the page with an error
//! banner instead of a JSON error; only rendering and database failures
//! become a 500.
//!
//! KPI cards on paginated pages are computed over the rendered page of
//! rows, which the templates label "en esta página".

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::Context as TeraContext;

use crate::api::middleware::AppState;
use crate::api::reports::{CustomersQuery, InventoryQuery, ProductsQuery, SalesQuery};
use crate::models::{ListParams, PagedResult, SalesDailyRow};
use crate::services::ReportServiceError;

/// Internal page failure; renders a plain 500 page
pub struct PageError(anyhow::Error);

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "page render failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error al generar la página</h1>".to_string()),
        )
            .into_response()
    }
}

/// Insert the pagination block every paginated template expects
fn insert_pagination<T: Serialize>(ctx: &mut TeraContext, result: &PagedResult<T>) {
    ctx.insert("rows", &result.items);
    ctx.insert("total", &result.total);
    ctx.insert("page", &result.page);
    ctx.insert("limit", &result.per_page);
    ctx.insert("total_pages", &result.total_pages());
    ctx.insert("has_prev", &result.has_prev());
    ctx.insert("has_next", &result.has_next());
    ctx.insert("prev_page", &result.page.saturating_sub(1).max(1));
    ctx.insert("next_page", &(result.page + 1));
}

/// GET / - overview with one KPI card per report
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let one = ListParams::new(1, 1);
    let payment_mix = state.report_service.payment_mix().await?;
    let inventory = state
        .report_service
        .inventory_risk(None, one.clone())
        .await?;
    let customers = state.report_service.customer_value(one.clone()).await?;
    let (products, _) = state.report_service.top_products(None, one).await?;

    let recaudado: f64 = payment_mix.iter().map(|r| r.total_recaudado).sum();

    let mut ctx = TeraContext::new();
    ctx.insert("kpi_recaudado", &recaudado);
    ctx.insert("kpi_riesgo", &inventory.total);
    ctx.insert("kpi_clientes", &customers.total);
    ctx.insert("kpi_productos", &products.total);

    Ok(Html(state.templates.render("index.html", &ctx)?))
}

/// GET /reports/sales - daily sales table with a date-range filter
pub async fn sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> Result<Html<String>, PageError> {
    let mut ctx = TeraContext::new();
    ctx.insert("date_from", query.date_from.as_deref().unwrap_or(""));
    ctx.insert("date_to", query.date_to.as_deref().unwrap_or(""));

    match state
        .report_service
        .sales_daily(query.date_from.as_deref(), query.date_to.as_deref())
        .await
    {
        Ok(rows) => {
            let total: f64 = rows.iter().map(|r| r.total_ventas).sum();
            let tickets: i64 = rows.iter().map(|r| r.tickets).sum();
            let promedio = if tickets > 0 {
                total / tickets as f64
            } else {
                0.0
            };
            ctx.insert("kpi_total", &total);
            ctx.insert("kpi_tickets", &tickets);
            ctx.insert("kpi_promedio", &promedio);
            ctx.insert("rows", &rows);
        }
        Err(ReportServiceError::Validation(msg)) => {
            ctx.insert("kpi_total", &0.0);
            ctx.insert("kpi_tickets", &0i64);
            ctx.insert("kpi_promedio", &0.0);
            ctx.insert("rows", &Vec::<SalesDailyRow>::new());
            ctx.insert("error", &msg);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Html(state.templates.render("sales.html", &ctx)?))
}

/// GET /reports/payment-mix - payment method table
pub async fn payment_mix(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let rows = state.report_service.payment_mix().await?;
    let recaudado: f64 = rows.iter().map(|r| r.total_recaudado).sum();

    let mut ctx = TeraContext::new();
    ctx.insert("kpi_recaudado", &recaudado);
    ctx.insert("kpi_metodos", &rows.len());
    ctx.insert("rows", &rows);

    Ok(Html(state.templates.render("payment_mix.html", &ctx)?))
}

/// GET /reports/inventory - paginated low-stock table with category filter
pub async fn inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Html<String>, PageError> {
    let params = ListParams::new(query.page, query.limit);

    let mut ctx = TeraContext::new();
    ctx.insert("category_id", query.category_id.as_deref().unwrap_or(""));

    match state
        .report_service
        .inventory_risk(query.category_id.as_deref(), params.clone())
        .await
    {
        Ok(result) => {
            let sin_stock = result
                .items
                .iter()
                .filter(|r| r.nivel_riesgo == "SIN STOCK")
                .count();
            let criticos = result
                .items
                .iter()
                .filter(|r| r.nivel_riesgo == "CRÍTICO")
                .count();
            ctx.insert("kpi_sin_stock", &sin_stock);
            ctx.insert("kpi_criticos", &criticos);
            insert_pagination(&mut ctx, &result);
        }
        Err(ReportServiceError::Validation(msg)) => {
            ctx.insert("kpi_sin_stock", &0usize);
            ctx.insert("kpi_criticos", &0usize);
            insert_pagination(
                &mut ctx,
                &PagedResult::<crate::models::InventoryRiskRow>::new(vec![], 0, &params),
            );
            ctx.insert("error", &msg);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Html(state.templates.render("inventory.html", &ctx)?))
}

/// GET /reports/customers - paginated customer value table
pub async fn customers(
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> Result<Html<String>, PageError> {
    let params = ListParams::new(query.page, query.limit);
    let result = state.report_service.customer_value(params).await?;

    let gastado: f64 = result.items.iter().map(|r| r.total_gastado).sum();

    let mut ctx = TeraContext::new();
    ctx.insert("kpi_clientes", &result.total);
    ctx.insert("kpi_gastado", &gastado);
    insert_pagination(&mut ctx, &result);

    Ok(Html(state.templates.render("customers.html", &ctx)?))
}

/// GET /reports/products - paginated product ranking with search
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Html<String>, PageError> {
    let params = ListParams::new(query.page, query.limit);
    let (result, search) = state
        .report_service
        .top_products(query.search.as_deref(), params)
        .await?;

    let revenue: f64 = result.items.iter().map(|r| r.total_revenue).sum();

    let mut ctx = TeraContext::new();
    ctx.insert("search", search.as_deref().unwrap_or(""));
    ctx.insert("kpi_productos", &result.total);
    ctx.insert("kpi_revenue", &revenue);
    insert_pagination(&mut ctx, &result);

    Ok(Html(state.templates.render("products.html", &ctx)?))
}
