//! Router setup for the webhook endpoint.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use nutrilog_core::config::NutrilogConfig;
use nutrilog_core::error::NutrilogError;

use crate::error::panic_reply;
use crate::handlers;
use crate::state::AppState;

/// Skill payloads are small; anything larger is treated as malformed.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the axum Router serving the nutrition webhook.
///
/// The webhook path comes from `config.server.webhook_path`. Panics inside
/// the handler are converted to the server-error envelope.
pub fn create_router(state: AppState) -> Router {
    let path = webhook_path(&state.config.server.webhook_path);

    Router::new()
        .route(&path, post(handlers::nutrition))
        .layer(CatchPanicLayer::custom(panic_reply))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Normalize a configured path so axum accepts it.
fn webhook_path(configured: &str) -> String {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        "/nutrition".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &NutrilogConfig, state: AppState) -> Result<(), NutrilogError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NutrilogError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(
        addr = %addr,
        path = %webhook_path(&config.server.webhook_path),
        "Webhook server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NutrilogError::Server(format!("Server error: {}", e)))?;

    tracing::info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
