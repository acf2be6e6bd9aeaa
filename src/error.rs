// Error types for rendering and the HTTP layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

// ============================================================================
// HTTP Errors
// ============================================================================

#[cfg(feature = "api")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

#[cfg(feature = "api")]
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no page at {0}")]
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Render(e) => {
                tracing::error!("render failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(all(test, feature = "api"))]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("/browse".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    #[tokio::test]
    async fn test_render_error_response() {
        let err = RenderError::Template(askama::Error::Fmt(std::fmt::Error));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_response(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("template error: "), "got {}", message);
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = AppError::NotFound("/dashboard".to_string()).into_response();
        let body = json_response(response).await;
        assert_eq!(body, serde_json::json!({ "error": "no page at /dashboard" }));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound("/admin".into()).to_string(), "no page at /admin");
    }
}
