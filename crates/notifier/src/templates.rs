//! Email templates — subject and HTML body per notification type.
//!
//! Each type maps to a pair of pure renderers in a fixed table. Types without
//! an entry (including `Other`) use the generic notification template.
//! Payload values are decoded into per-type records of [`TemplateField`]s and
//! interpolated verbatim.

use serde::Deserialize;
use serde_json::Value;

use crate::field::{TemplateField, extract};
use crate::types::NotificationType;

/// Inline stylesheet shared by every template.
const BASE_STYLE: &str = r#"
    <style>
      body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
      .container { max-width: 600px; margin: 0 auto; padding: 20px; }
      .header { background: #4F46E5; color: white; padding: 20px; border-radius: 8px 8px 0 0; }
      .content { background: #f9f9f9; padding: 20px; }
      .footer { background: #333; color: white; padding: 15px; text-align: center; border-radius: 0 0 8px 8px; }
      .button { display: inline-block; padding: 12px 24px; background: #4F46E5; color: white; text-decoration: none; border-radius: 5px; margin: 10px 0; }
    </style>
"#;

const FOOTER: &str = "© 2025 KoolConnect School Management System";

const DEFAULT_SUBJECT: &str = "KoolConnect Notification";
const DEFAULT_MESSAGE: &str = "You have a new notification from KoolConnect.";
const BULK_SUBJECT: &str = "Important School Notification";

/// Subject and body renderers for one notification type.
pub struct Template {
    pub subject: fn(&Value) -> String,
    pub body: fn(&Value) -> String,
}

static TEMPLATES: [(NotificationType, Template); 7] = [
    (
        NotificationType::ParentInvite,
        Template {
            subject: parent_invite_subject,
            body: parent_invite_body,
        },
    ),
    (
        NotificationType::AttendanceAlert,
        Template {
            subject: attendance_alert_subject,
            body: attendance_alert_body,
        },
    ),
    (
        NotificationType::NewLesson,
        Template {
            subject: new_lesson_subject,
            body: new_lesson_body,
        },
    ),
    (
        NotificationType::PhotoTagged,
        Template {
            subject: photo_tagged_subject,
            body: photo_tagged_body,
        },
    ),
    (
        NotificationType::PasswordReset,
        Template {
            subject: password_reset_subject,
            body: password_reset_body,
        },
    ),
    (
        NotificationType::Welcome,
        Template {
            subject: welcome_subject,
            body: welcome_body,
        },
    ),
    (
        NotificationType::BulkNotification,
        Template {
            subject: bulk_notification_subject,
            body: generic_body,
        },
    ),
];

static DEFAULT_TEMPLATE: Template = Template {
    subject: generic_subject,
    body: generic_body,
};

/// Look up the template for a notification type.
pub fn template_for(kind: NotificationType) -> &'static Template {
    TEMPLATES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, template)| template)
        .unwrap_or(&DEFAULT_TEMPLATE)
}

pub fn render_subject(kind: NotificationType, data: &Value) -> String {
    (template_for(kind).subject)(data)
}

pub fn render_body(kind: NotificationType, data: &Value) -> String {
    (template_for(kind).body)(data)
}

/// Wrap a content block in the shared stylesheet, header and footer.
fn layout(heading: &str, content: &str) -> String {
    format!(
        r#"{BASE_STYLE}
    <div class="container">
      <div class="header">
        <h1>{heading}</h1>
      </div>
      <div class="content">
{content}
      </div>
      <div class="footer">
        <p>{FOOTER}</p>
      </div>
    </div>
"#
    )
}

// ---------------------------------------------------------------------------
// Field records
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParentInviteData {
    parent_name: TemplateField,
    school_name: TemplateField,
    temp_password: TemplateField,
    login_url: TemplateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttendanceAlertData {
    parent_name: TemplateField,
    student_name: TemplateField,
    date: TemplateField,
    reason: TemplateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NewLessonData {
    student_name: TemplateField,
    subject: TemplateField,
    teacher_name: TemplateField,
    lesson_content: TemplateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhotoTaggedData {
    student_name: TemplateField,
    photo_count: TemplateField,
    school_name: TemplateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PasswordResetData {
    user_name: TemplateField,
    reset_url: TemplateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WelcomeData {
    user_name: TemplateField,
    school_name: TemplateField,
}

/// Fields of `bulk_notification` and of the generic template.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenericData {
    subject: TemplateField,
    message: TemplateField,
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

fn parent_invite_subject(data: &Value) -> String {
    let d: ParentInviteData = extract(data);
    format!("Welcome to {} - Parent Account Created", d.school_name)
}

fn attendance_alert_subject(data: &Value) -> String {
    let d: AttendanceAlertData = extract(data);
    format!("Attendance Alert for {}", d.student_name)
}

fn new_lesson_subject(data: &Value) -> String {
    let d: NewLessonData = extract(data);
    format!("New Lesson Posted: {}", d.subject)
}

fn photo_tagged_subject(data: &Value) -> String {
    let d: PhotoTaggedData = extract(data);
    format!("New Photos Available - {}", d.student_name)
}

fn password_reset_subject(_data: &Value) -> String {
    "Password Reset Request - KoolConnect".to_string()
}

fn welcome_subject(data: &Value) -> String {
    let d: WelcomeData = extract(data);
    format!("Welcome to {}", d.school_name)
}

fn bulk_notification_subject(data: &Value) -> String {
    let d: GenericData = extract(data);
    d.subject.or(BULK_SUBJECT)
}

fn generic_subject(_data: &Value) -> String {
    DEFAULT_SUBJECT.to_string()
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

fn parent_invite_body(data: &Value) -> String {
    let d: ParentInviteData = extract(data);
    let content = format!(
        r#"        <h2>Hello {parent},</h2>
        <p>Your parent account has been created for <strong>{school}</strong>.</p>
        <p><strong>Login Details:</strong></p>
        <ul>
          <li>Email: Use the email this was sent to</li>
          <li>Temporary Password: {password}</li>
        </ul>
        <p>Please change your password after first login.</p>
        <a href="{login_url}" class="button">Login Now</a>"#,
        parent = d.parent_name,
        school = d.school_name,
        password = d.temp_password,
        login_url = d.login_url,
    );
    layout("Welcome to KoolConnect", &content)
}

fn attendance_alert_body(data: &Value) -> String {
    let d: AttendanceAlertData = extract(data);
    let reason = if d.reason.is_truthy() {
        format!("<p><strong>Reason:</strong> {}</p>", d.reason)
    } else {
        String::new()
    };
    let content = format!(
        r#"        <h2>Hello {parent},</h2>
        <p><strong>{student}</strong> was marked absent on <strong>{date}</strong>.</p>
        {reason}
        <p>If this is incorrect, please contact your child's teacher or school administration.</p>"#,
        parent = d.parent_name,
        student = d.student_name,
        date = d.date,
    );
    layout("Attendance Alert", &content)
}

fn new_lesson_body(data: &Value) -> String {
    let d: NewLessonData = extract(data);
    let content = format!(
        r#"        <h2>New lesson for {student}</h2>
        <p><strong>Subject:</strong> {subject}</p>
        <p><strong>Teacher:</strong> {teacher}</p>
        <div style="background: white; padding: 15px; border-radius: 5px; margin: 10px 0;">
          <h3>Lesson Content:</h3>
          <p>{lesson}</p>
        </div>
        <p>Login to KoolConnect to view full details and any attachments.</p>"#,
        student = d.student_name,
        subject = d.subject,
        teacher = d.teacher_name,
        lesson = d.lesson_content,
    );
    layout("New Lesson Posted", &content)
}

fn photo_tagged_body(data: &Value) -> String {
    let d: PhotoTaggedData = extract(data);
    let plural = d.photo_count.as_number().is_some_and(|count| count > 1.0);
    let (suffix, verb) = if plural { ("s", "have") } else { ("", "has") };
    let content = format!(
        r#"        <h2>New photos of {student}</h2>
        <p><strong>{count}</strong> new photo{suffix} {verb} been uploaded to {school}.</p>
        <p>Login to KoolConnect to view and download the photos.</p>"#,
        student = d.student_name,
        count = d.photo_count,
        school = d.school_name,
    );
    layout("New Photos Available", &content)
}

fn password_reset_body(data: &Value) -> String {
    let d: PasswordResetData = extract(data);
    let content = format!(
        r#"        <h2>Hello {user},</h2>
        <p>You requested a password reset for your KoolConnect account.</p>
        <a href="{reset_url}" class="button">Reset Password</a>
        <p>This link will expire in 24 hours. If you didn't request this, please ignore this email.</p>"#,
        user = d.user_name,
        reset_url = d.reset_url,
    );
    layout("Password Reset Request", &content)
}

fn welcome_body(data: &Value) -> String {
    let d: WelcomeData = extract(data);
    let content = format!(
        r#"        <h2>Hello {user},</h2>
        <p>Welcome to <strong>{school}</strong>'s KoolConnect system!</p>
        <p>You now have access to:</p>
        <ul>
          <li>Real-time attendance updates</li>
          <li>Daily lessons and assignments</li>
          <li>Photo galleries</li>
          <li>Direct messaging with teachers</li>
          <li>School announcements</li>
        </ul>
        <p>Login to get started and explore all the features.</p>"#,
        user = d.user_name,
        school = d.school_name,
    );
    layout("Welcome to KoolConnect", &content)
}

fn generic_body(data: &Value) -> String {
    let d: GenericData = extract(data);
    let content = format!("        <p>{}</p>", d.message.or(DEFAULT_MESSAGE));
    layout(DEFAULT_SUBJECT, &content)
}
