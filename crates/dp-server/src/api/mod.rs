//! API routes module.

mod health;
mod info;
pub mod middleware;
mod root;

use std::sync::Arc;

use axum::http::Uri;
use axum::Router;

use crate::AppState;
use dp_common::AppError;

/// Build the API router with all sub-routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root::router(state.clone()))
        .merge(health::router(state.clone()))
        .nest("/api", info::router(state))
}

/// Fallback for unmatched routes: 404 with the requested path echoed back.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.to_string())
}


#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::testutil;

    #[tokio::test]
    async fn unknown_route_returns_404_with_path() {
        let app = crate::app(testutil::state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = testutil::body_json(response).await;
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], "/nonexistent");
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let app = crate::app(testutil::state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }
}
