//! Health check endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::AppState;
use dp_common::AppResult;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/health", get(health_check)).with_state(state)
}

// ─── Response type ───────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    environment: String,
    /// Seconds since the server process started.
    uptime: u64,
    timestamp: String,
}

// ─── Handler ─────────────────────────────────────────────────

async fn health_check(State(state): State<Arc<AppState>>) -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.release.environment.clone(),
        uptime: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
