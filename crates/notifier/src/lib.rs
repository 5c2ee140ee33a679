//! Notification email delivery.
//!
//! Turns a typed notification request into a templated email and hands it to
//! Resend in a single HTTP call. No queueing or retries.

pub mod dispatcher;
pub mod field;
pub mod resend;
pub mod sender;
pub mod templates;
pub mod types;

pub use dispatcher::Dispatcher;
pub use sender::EmailProvider;
