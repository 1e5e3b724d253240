//! Detailed application info endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;
use dp_common::AppResult;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/info", get(info)).with_state(state)
}

// ─── Response type ───────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfoResponse {
    name: String,
    description: String,
    environment: String,
    version: String,
    build_tag: String,
    release_note: String,
}

// ─── Handler ─────────────────────────────────────────────────

async fn info(State(state): State<Arc<AppState>>) -> AppResult<Json<InfoResponse>> {
    Ok(Json(InfoResponse {
        name: "DeployPilot".to_string(),
        description: "A sample application for demonstrating CI/CD deployment pipelines"
            .to_string(),
        environment: state.release.environment.clone(),
        version: state.release.version.clone(),
        build_tag: state.release.build_tag.clone(),
        release_note: state.release.release_note.clone(),
    }))
}
