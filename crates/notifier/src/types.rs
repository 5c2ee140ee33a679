use serde::{Deserialize, Serialize};

/// Sender address used for every outbound email.
pub const SENDER_ADDRESS: &str = "onboarding@resend.dev";

/// Notification kinds with a dedicated template.
///
/// Parsing never fails: unrecognised or absent tags become `Other`, which
/// renders the generic notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    ParentInvite,
    AttendanceAlert,
    NewLesson,
    PhotoTagged,
    PasswordReset,
    Welcome,
    BulkNotification,
    Other,
}

impl NotificationType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "parent_invite" => NotificationType::ParentInvite,
            "attendance_alert" => NotificationType::AttendanceAlert,
            "new_lesson" => NotificationType::NewLesson,
            "photo_tagged" => NotificationType::PhotoTagged,
            "password_reset" => NotificationType::PasswordReset,
            "welcome" => NotificationType::Welcome,
            "bulk_notification" => NotificationType::BulkNotification,
            _ => NotificationType::Other,
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::ParentInvite => write!(f, "parent_invite"),
            NotificationType::AttendanceAlert => write!(f, "attendance_alert"),
            NotificationType::NewLesson => write!(f, "new_lesson"),
            NotificationType::PhotoTagged => write!(f, "photo_tagged"),
            NotificationType::PasswordReset => write!(f, "password_reset"),
            NotificationType::Welcome => write!(f, "welcome"),
            NotificationType::BulkNotification => write!(f, "bulk_notification"),
            NotificationType::Other => write!(f, "other"),
        }
    }
}

/// Inbound request body for `POST /send-email`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    /// Raw notification tag, echoed back in the response. Any JSON value is
    /// accepted; non-strings select the generic template.
    #[serde(rename = "type", default)]
    pub kind: Option<serde_json::Value>,

    /// Single recipient, used when `recipients` is absent.
    #[serde(default)]
    pub to: Option<String>,

    /// Explicit recipient list; takes precedence over `to`.
    #[serde(default)]
    pub recipients: Option<Vec<String>>,

    /// Template fields; the expected shape depends on `kind`.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl NotificationRequest {
    pub fn notification_type(&self) -> NotificationType {
        self.kind
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(NotificationType::from_tag)
            .unwrap_or(NotificationType::Other)
    }

    /// Resolve the recipient list.
    ///
    /// `recipients` wins whenever it is present, even if empty. Otherwise the
    /// list holds `to`, or nothing at all.
    pub fn recipients(&self) -> Vec<String> {
        match (&self.recipients, &self.to) {
            (Some(list), _) => list.clone(),
            (None, Some(to)) => vec![to.clone()],
            (None, None) => Vec::new(),
        }
    }
}

/// Outbound message handed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Successful dispatch answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub message_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<serde_json::Value>,
}
