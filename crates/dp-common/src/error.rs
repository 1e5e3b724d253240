use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Convenient Result alias.
pub type AppResult<T> = Result<T, AppError>;

/// Environment name reported in 500 bodies. Set once at startup.
static CURRENT_ENVIRONMENT: OnceLock<String> = OnceLock::new();

/// Record the environment name used in error responses.
/// Subsequent calls are no-ops.
pub fn set_environment(environment: &str) {
    let _ = CURRENT_ENVIRONMENT.set(environment.to_string());
}

fn environment() -> &'static str {
    CURRENT_ENVIRONMENT
        .get()
        .map(String::as_str)
        .unwrap_or("development")
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(path) => {
                let body = json!({
                    "error": "Route not found",
                    "path": path,
                });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            Self::Internal(err) => {
                tracing::error!("Unhandled error: {err:#}");
                let body = json!({
                    "error": "Something went wrong!",
                    "environment": environment(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status() {
        let resp = AppError::NotFound("/nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_status() {
        let resp = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
