//! Shared application state for the Axum API server.

use std::sync::Arc;

use koolconnect_common::config::AppConfig;
use koolconnect_notifier::Dispatcher;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Build state from configuration, wiring Resend when a key is present.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Dispatcher::from_config(config))
    }
}
