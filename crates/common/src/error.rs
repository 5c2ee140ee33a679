use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Common error types used across the application.
///
/// The notification path is best-effort: every variant is surfaced to the
/// caller as a 500 with `{ "error": <message> }`, never retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success answer from the email provider, carrying its message.
    #[error("Resend API error: {0}")]
    Provider(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The provider could not be reached or its answer could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message exposed to the caller in the error body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Config(msg) => msg.clone(),
            AppError::Provider(_) => self.to_string(),
            AppError::MalformedRequest(msg) => msg.clone(),
            AppError::Transport(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.public_message();

        tracing::warn!(error = %self, "Request failed");

        let body = json!({ "error": message });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_config_error_exposes_bare_message() {
        let (status, json) =
            body_json(AppError::Config("RESEND_API_KEY not configured".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "RESEND_API_KEY not configured");
    }

    #[tokio::test]
    async fn test_provider_error_is_prefixed() {
        let (status, json) = body_json(AppError::Provider("Invalid `to` field".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Resend API error: Invalid `to` field");
    }

    #[tokio::test]
    async fn test_every_kind_maps_to_500() {
        for err in [
            AppError::MalformedRequest("expected value at line 1 column 1".into()),
            AppError::Transport("connection refused".into()),
            AppError::Internal("boom".into()),
        ] {
            let (status, json) = body_json(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(json["error"].is_string());
        }
    }
}
