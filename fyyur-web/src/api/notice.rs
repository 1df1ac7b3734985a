//! HTTP rendering of mutation outcomes
//!
//! Success → 200 (201 for creates), validation failure → 422, persistence
//! failure → 500. The body always carries the user-facing notices.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::services::MutationOutcome;

impl<T: Serialize> IntoResponse for MutationOutcome<T> {
    fn into_response(self) -> Response {
        render(self, StatusCode::OK)
    }
}

/// Render the outcome of a create request
pub fn created<T: Serialize>(outcome: MutationOutcome<T>) -> Response {
    render(outcome, StatusCode::CREATED)
}

fn render<T: Serialize>(outcome: MutationOutcome<T>, success: StatusCode) -> Response {
    let notices = outcome.notices();
    match outcome {
        MutationOutcome::Success { notice, record } => (
            success,
            Json(json!({
                "status": "success",
                "notice": notice,
                "record": record,
            })),
        )
            .into_response(),
        MutationOutcome::ValidationFailed(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "invalid",
                "errors": errors,
                "notices": notices,
            })),
        )
            .into_response(),
        MutationOutcome::PersistenceFailed { notice } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "notice": notice,
            })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_created_success_is_201() {
        let outcome = MutationOutcome::Success {
            notice: "Show was successfully listed!".to_string(),
            record: json!({"id": 1}),
        };
        let response = created(outcome);

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["record"]["id"], 1);
    }

    #[tokio::test]
    async fn test_validation_failure_is_422_with_notices() {
        let outcome: MutationOutcome<()> =
            MutationOutcome::ValidationFailed(vec![FieldError::new("name", "This field is required.")]);
        let response = outcome.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["status"], "invalid");
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["notices"][0], "name This field is required.");
    }

    #[tokio::test]
    async fn test_persistence_failure_is_500() {
        let outcome: MutationOutcome<()> = MutationOutcome::PersistenceFailed {
            notice: "An error occurred. Show could not be listed.".to_string(),
        };
        let response = created(outcome);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({
            "status": "error",
            "notice": "An error occurred. Show could not be listed.",
        }));
    }
}
