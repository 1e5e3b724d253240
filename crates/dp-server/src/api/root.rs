//! Root endpoint — basic application information.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::AppState;
use dp_common::AppResult;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

// ─── Response type ───────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RootResponse {
    message: String,
    environment: String,
    version: String,
    build_tag: String,
    timestamp: String,
}

// ─── Handler ─────────────────────────────────────────────────

async fn index(State(state): State<Arc<AppState>>) -> AppResult<Json<RootResponse>> {
    Ok(Json(RootResponse {
        message: "DeployPilot API".to_string(),
        environment: state.release.environment.clone(),
        version: state.release.version.clone(),
        build_tag: state.release.build_tag.clone(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
