//! KoolConnect mailer binary entrypoint.

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use koolconnect_common::config::AppConfig;

use koolconnect_api::routes::create_router;
use koolconnect_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("koolconnect_api=debug,koolconnect_notifier=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting KoolConnect mailer...");

    // Load configuration
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr();

    // Build application state
    let state = AppState::from_config(&config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Mailer listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    Ok(())
}
