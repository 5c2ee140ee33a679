//! Notification email route.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use koolconnect_common::error::AppError;
use koolconnect_notifier::types::DispatchResponse;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/send-email", post(send_email).options(preflight))
}

/// OPTIONS /send-email — CORS preflight. The body is never read.
async fn preflight() -> impl IntoResponse {
    (
        [
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
        "ok",
    )
}

/// POST /send-email — Render the notification and send it through Resend.
///
/// The body is taken raw so that malformed JSON is reported like every other
/// failure (500 with `{ "error": ... }`) instead of an extractor rejection.
async fn send_email(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DispatchResponse>, AppError> {
    let response = state.dispatcher.dispatch_raw(&body).await?;
    Ok(Json(response))
}
