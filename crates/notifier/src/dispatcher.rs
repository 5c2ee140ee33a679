//! Notification dispatcher — request in, one provider call out.
//!
//! For each request:
//! 1. Parse the JSON body into a `NotificationRequest`
//! 2. Fail with a configuration error if no provider key was configured
//! 3. Resolve recipients, subject and body into an `EmailMessage`
//! 4. Send it once and report the provider's message id

use std::sync::Arc;

use koolconnect_common::config::AppConfig;
use koolconnect_common::error::AppError;

use crate::resend::ResendClient;
use crate::sender::EmailProvider;
use crate::templates;
use crate::types::{DispatchResponse, EmailMessage, NotificationRequest, SENDER_ADDRESS};

const MISSING_KEY: &str = "RESEND_API_KEY not configured";

#[derive(Clone)]
pub struct Dispatcher {
    provider: Option<Arc<dyn EmailProvider>>,
}

impl Dispatcher {
    /// Build a dispatcher backed by Resend when an API key is configured.
    ///
    /// A missing key is not fatal: the dispatcher is created unconfigured and
    /// answers every request with a configuration error.
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.resend_api_key {
            Some(key) => Self::with_provider(Arc::new(ResendClient::new(key.clone()))),
            None => {
                tracing::warn!("RESEND_API_KEY is not set; email requests will fail");
                Self::unconfigured()
            }
        }
    }

    pub fn with_provider(provider: Arc<dyn EmailProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Parse a raw request body and dispatch it.
    pub async fn dispatch_raw(&self, body: &[u8]) -> Result<DispatchResponse, AppError> {
        let request: NotificationRequest = serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;
        self.dispatch(request).await
    }

    pub async fn dispatch(
        &self,
        request: NotificationRequest,
    ) -> Result<DispatchResponse, AppError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AppError::Config(MISSING_KEY.to_string()))?;

        let message = Self::compose(&request);
        let recipients = message.to.len();

        let message_id = provider.send(&message).await?;

        tracing::info!(
            notification_type = %request.notification_type(),
            recipients,
            message_id = %message_id,
            "Notification email sent"
        );

        Ok(DispatchResponse {
            success: true,
            message_id,
            kind: request.kind,
        })
    }

    /// Build the outbound message for a request. Pure.
    pub fn compose(request: &NotificationRequest) -> EmailMessage {
        let kind = request.notification_type();
        EmailMessage {
            from: SENDER_ADDRESS.to_string(),
            to: request.recipients(),
            subject: templates::render_subject(kind, &request.data),
            html: templates::render_body(kind, &request.data),
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Records every message and answers with a fixed outcome.
    #[derive(Default)]
    struct RecordingProvider {
        sent: Mutex<Vec<EmailMessage>>,
        reject_with: Option<String>,
    }

    #[async_trait]
    impl EmailProvider for RecordingProvider {
        async fn send(&self, message: &EmailMessage) -> Result<String, AppError> {
            self.sent.lock().unwrap().push(message.clone());
            match &self.reject_with {
                Some(reason) => Err(AppError::Provider(reason.clone())),
                None => Ok("msg_test".to_string()),
            }
        }
    }

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[tokio::test]
    async fn test_welcome_dispatch_sends_one_message() {
        let provider = Arc::new(RecordingProvider::default());
        let dispatcher = Dispatcher::with_provider(provider.clone());

        let response = dispatcher
            .dispatch_raw(&body(json!({
                "type": "welcome",
                "to": "a@x.com",
                "data": {"user_name": "Sam", "school_name": "Oak Elementary"}
            })))
            .await
            .unwrap();

        assert_eq!(
            response,
            DispatchResponse {
                success: true,
                message_id: "msg_test".to_string(),
                kind: Some(json!("welcome")),
            }
        );

        let sent = provider.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "onboarding@resend.dev");
        assert_eq!(sent[0].to, vec!["a@x.com"]);
        assert_eq!(sent[0].subject, "Welcome to Oak Elementary");
        assert!(sent[0].html.contains("Hello Sam,"));
    }

    #[tokio::test]
    async fn test_unconfigured_fails_before_sending() {
        let dispatcher = Dispatcher::unconfigured();
        let err = dispatcher
            .dispatch_raw(&body(json!({"type": "welcome", "to": "a@x.com", "data": {}})))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.public_message(), "RESEND_API_KEY not configured");
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let dispatcher = Dispatcher::from_config(&AppConfig::default());
        assert!(!dispatcher.is_configured());

        let config = AppConfig {
            resend_api_key: Some("re_test".to_string()),
            ..AppConfig::default()
        };
        assert!(Dispatcher::from_config(&config).is_configured());
    }

    #[tokio::test]
    async fn test_provider_rejection_is_surfaced() {
        let provider = Arc::new(RecordingProvider {
            reject_with: Some("Invalid `to` field.".to_string()),
            ..Default::default()
        });
        let dispatcher = Dispatcher::with_provider(provider.clone());

        let err = dispatcher
            .dispatch_raw(&body(json!({"type": "welcome", "data": {}})))
            .await
            .unwrap_err();

        assert_eq!(err.public_message(), "Resend API error: Invalid `to` field.");
        assert_eq!(provider.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let dispatcher = Dispatcher::with_provider(provider.clone());

        let err = dispatcher.dispatch_raw(b"{not json").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
        assert!(provider.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_compose_prefers_recipient_list() {
        let request: NotificationRequest = serde_json::from_value(json!({
            "type": "bulk_notification",
            "to": "ignored@x.com",
            "recipients": ["a@x.com", "b@x.com"],
            "data": {"subject": "Snow day", "message": "School is closed."}
        }))
        .unwrap();

        let message = Dispatcher::compose(&request);
        assert_eq!(message.to, vec!["a@x.com", "b@x.com"]);
        assert_eq!(message.subject, "Snow day");
        assert!(message.html.contains("School is closed."));
        assert_eq!(message, Dispatcher::compose(&request));
    }

    #[test]
    fn test_compose_unknown_type_uses_default() {
        let request: NotificationRequest = serde_json::from_value(json!({
            "type": "field_trip",
            "to": "a@x.com",
            "data": {}
        }))
        .unwrap();

        let message = Dispatcher::compose(&request);
        assert_eq!(message.subject, "KoolConnect Notification");
        assert!(message.html.contains("You have a new notification from KoolConnect."));
    }
}
