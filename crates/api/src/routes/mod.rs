pub mod health;
pub mod send_email;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Build the complete API router with all routes.
///
/// Every response, errors included, allows any origin. Request bodies are
/// unbounded so oversized payloads still reach the dispatcher.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(send_email::router())
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
