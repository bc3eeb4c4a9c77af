//! Error responses
//!
//! Every failure is returned as `{ "error": <message> }` with the status
//! chosen by [`StovaSpotError::status_code`]. Server-side failures are logged
//! in full and reported with a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use crate::utils::errors::StovaSpotError;

impl IntoResponse for StovaSpotError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.is_client_error() {
            self.to_string()
        } else {
            error!(error = %self, severity = ?self.severity(), "Request failed");
            "Internal server error".to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for StovaSpotError {
    fn from(rejection: JsonRejection) -> Self {
        StovaSpotError::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_message() {
        let response = StovaSpotError::validation("Event name is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = StovaSpotError::contact_not_found("abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = StovaSpotError::UnsupportedMediaType("text/plain".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_database_errors_are_internal() {
        let response = StovaSpotError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_database_error_message_is_hidden() {
        let response = StovaSpotError::Database(sqlx::Error::PoolTimedOut).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
