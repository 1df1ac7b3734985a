//! Error types for fyyur-web

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::api::ui;

/// API error type
///
/// Field validation and persistence failures of mutations are not errors;
/// they travel as `MutationOutcome` values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// fyyur-common error
    #[error("Common error: {0}")]
    Common(#[from] fyyur_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::NotFound(msg) => msg,
            ApiError::Common(fyyur_common::Error::NotFound(msg)) => msg,
            ApiError::Common(err) => {
                // Cause stays in the log
                error!("Request failed: {}", err);
                return ui::server_error();
            }
        };

        let body = Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": message,
            }
        }));

        (StatusCode::NOT_FOUND, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_common_not_found_maps_to_404() {
        let response =
            ApiError::from(fyyur_common::Error::NotFound("venue 7".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "venue 7");
    }

    #[tokio::test]
    async fn test_store_failure_renders_failure_page() {
        let err = fyyur_common::Error::Config("disk on fire at /var/lib/fyyur".to_string());
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let page = body_text(response).await;
        assert!(!page.contains("/var/lib/fyyur"));
    }

    #[tokio::test]
    async fn test_database_failure_renders_failure_page() {
        let err = fyyur_common::Error::Database(sqlx::Error::PoolClosed);
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
