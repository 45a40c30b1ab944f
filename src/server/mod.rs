//! HTTP surface — axum router and server loop.
//!
//! ## URL layout
//!
//! ```text
//! GET  /api/health
//! GET  /api/brands?category=<string>
//! GET  /api/brands/{id}
//! POST /api/ai/generate-color-scheme
//! POST /api/projects
//! GET  /api/projects
//! GET  /api/projects/{id}
//! ```
//!
//! Handlers receive [`AppState`] via [`axum::extract::State`]. The server
//! runs until the shared [`CancellationToken`] fires (Ctrl-C in `main`),
//! then drains in-flight requests via axum's graceful shutdown.

mod api;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::catalog::BrandStore;
use crate::error::AppError;
use crate::llm::LlmProvider;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler. Cheap to clone — the store is
/// reference-counted and the provider handle is internally `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BrandStore>,
    pub llm: LlmProvider,
    /// Strict scheme validation (see `[scheme] strict` in config).
    pub strict: bool,
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health",                    get(api::health))
        .route("/api/brands",                    get(api::list_brands))
        .route("/api/brands/{id}",               get(api::get_brand))
        .route("/api/ai/generate-color-scheme",  post(api::generate_color_scheme))
        .route("/api/projects",                  post(api::create_project).get(api::list_projects))
        .route("/api/projects/{id}",             get(api::get_project))
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn run(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("http server shut down");
    Ok(())
}
