use async_trait::async_trait;

use koolconnect_common::error::AppError;

use crate::types::EmailMessage;

/// Outbound email provider.
///
/// `ResendClient` is the production implementation; tests substitute
/// recording fakes.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send one message and return the provider-assigned message id.
    async fn send(&self, message: &EmailMessage) -> Result<String, AppError>;
}
