//! # DeployPilot Server
//!
//! REST API service for the CI/CD deployment pipeline demo. Exposes
//! informational endpoints that echo the release metadata stamped into the
//! environment by the deploy workflow.

mod api;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dp_common::{AppConfig, ReleaseInfo};

/// Shared application state available to all handlers.
pub struct AppState {
    pub release: ReleaseInfo,
    /// Process start, for the health endpoint's uptime field.
    pub started_at: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;
    let release = ReleaseInfo::from_env();

    // Initialize tracing
    let default_filter = config.server.log_level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Environment name reported in 500 bodies
    dp_common::error::set_environment(&release.environment);

    tracing::info!(
        "Starting DeployPilot server v{} (environment: {})",
        release.version,
        release.environment
    );
    tracing::info!("Build tag: {}", release.build_tag);

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Build shared state
    let state = Arc::new(AppState {
        release,
        started_at: Instant::now(),
    });

    let app = app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the full application router: API routes, 404 fallback, and the
/// middleware stack (security headers, CORS, request tracing).
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(api::router(state))
        .fallback(api::not_found)
        .layer(axum::middleware::from_fn(api::middleware::security_headers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
