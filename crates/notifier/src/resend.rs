//! Resend HTTP client.
//!
//! One `POST /emails` per message, authenticated with a bearer API key.
//! Non-success answers are turned into [`AppError::Provider`] carrying the
//! provider's `message`.

use async_trait::async_trait;
use serde::Deserialize;

use koolconnect_common::error::AppError;

use crate::sender::EmailProvider;
use crate::types::EmailMessage;

pub const RESEND_API_URL: &str = "https://api.resend.com";

/// Body returned by Resend: `id` on success, `message` on failure.
#[derive(Debug, Default, Deserialize)]
struct ResendResponse {
    id: Option<String>,
    message: Option<String>,
}

#[derive(Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ResendClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, RESEND_API_URL)
    }

    /// Point the client at a different API root (e.g. a local stand-in).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, message: &EmailMessage) -> Result<String, AppError> {
        let response = self
            .http
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach Resend: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read Resend response: {}", e)))?;

        if !status.is_success() {
            let parsed: ResendResponse = serde_json::from_str(&text).unwrap_or_default();
            let reason = parsed.message.unwrap_or_else(|| {
                if text.trim().is_empty() {
                    status.to_string()
                } else {
                    text.clone()
                }
            });

            tracing::warn!(status = %status, reason = %reason, "Resend rejected email");
            return Err(AppError::Provider(reason));
        }

        let parsed: ResendResponse = serde_json::from_str(&text)
            .map_err(|e| AppError::Transport(format!("Invalid Resend response: {}", e)))?;

        parsed
            .id
            .ok_or_else(|| AppError::Transport("Resend response missing message id".to_string()))
    }
}
