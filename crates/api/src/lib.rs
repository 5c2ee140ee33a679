//! KoolConnect notification endpoint.
//!
//! Endpoints:
//! - OPTIONS /send-email — CORS preflight
//! - POST    /send-email — Render and send a notification email
//! - GET     /health     — Liveness probe

pub mod routes;
pub mod state;
