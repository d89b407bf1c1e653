// ============================================================
// Layer 1 — HTTP API
// ============================================================
// A single prediction endpoint (plus a health probe) served by
// axum. Request-shape validation is left to axum's `Json`
// extractor; everything past that is answered with a JSON body
// and HTTP 200, including logical failures.
//
//   POST /predict   {"text": "..."}  → prediction or {"error": ...}
//   GET  /health                     → {"status", "artifacts_loaded"}

pub mod handlers;
pub mod schema;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::inference_service::InferenceService;

/// Shared, read-only state handed to every handler.
pub type AppState = Arc<InferenceService>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, service: InferenceService) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to '{addr}'"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
