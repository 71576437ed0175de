//! Cafe Reports - cafeteria business reporting dashboard

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_reports::{
    api::{self, AppState},
    config::Config,
    db::{self, repositories::SqlxReportsRepository, DatabasePool},
    services::ReportService,
    web::TemplateEngine,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_reports=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cafeteria reporting dashboard...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Initialize database
    let pool = db::create_pool(&config.database).await?;
    pool.ping().await?;
    tracing::info!("Database connected: {:?}", config.database.driver);

    // Load templates
    let templates = Arc::new(TemplateEngine::new(&config.templates.path)?);
    tracing::info!("Templates loaded from {:?}", config.templates.path);

    // Wire repository and service
    let report_service = Arc::new(ReportService::new(SqlxReportsRepository::boxed(
        pool.clone(),
    )));

    let state = AppState {
        pool: pool.clone(),
        report_service,
        templates,
    };

    // Build router
    let app = api::build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
