//! Axum handlers for `/api/*` routes.
//!
//! Failure policy (request boundary — nothing here is process-fatal):
//! - missing `brand` on the generate route → 400, before any provider call
//! - lookup miss → 404 with an `error: "not_found"` body
//! - storage/provider failure → 500 with a generic message; detail goes to
//!   the server log only
//! - malformed model output → 200 with an empty scheme (lenient default) or
//!   422 when strict validation is enabled

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::catalog::{Brand, NewProject};
use crate::scheme::{self, Preferences, SchemeError};

use super::AppState;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct BrandListQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct GenerateRequest {
    brand: Option<Brand>,
    #[serde(default)]
    preferences: Option<Preferences>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

/// Generic 500 for storage failures — detail stays in the log.
fn storage_failure(context: &str, e: impl std::fmt::Display) -> Response {
    error!(%context, error = %e, "storage operation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, json_error("storage", "storage operation failed"))
        .into_response()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /api/health
pub(super) async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "brandforge" }))).into_response()
}

/// GET /api/brands?category=<string>
pub(super) async fn list_brands(
    State(state): State<AppState>,
    Query(query): Query<BrandListQuery>,
) -> Response {
    match state.store.list_brands(query.category.as_deref()) {
        Ok(brands) => (StatusCode::OK, Json(brands)).into_response(),
        Err(e) => storage_failure("list brands", e),
    }
}

/// GET /api/brands/{id}
pub(super) async fn get_brand(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get_brand(id) {
        Ok(Some(brand)) => (StatusCode::OK, Json(brand)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, json_error("not_found", "brand not found")).into_response(),
        Err(e) => storage_failure("get brand", e),
    }
}

/// POST /api/ai/generate-color-scheme
pub(super) async fn generate_color_scheme(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Response {
    // Reject before touching the provider — the only required field.
    let Some(brand) = req.brand else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "brand is required" })),
        )
            .into_response();
    };
    let preferences = req.preferences.unwrap_or_default();

    match scheme::generate(&state.llm, &brand, &preferences, state.strict).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(SchemeError::Invalid(detail)) => {
            warn!(brand = %brand.name, %detail, "strict validation rejected model output");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "success": false, "message": format!("invalid color scheme: {detail}") })),
            )
                .into_response()
        }
        Err(SchemeError::Provider(e)) => {
            // Upstream detail (auth, quota, transport) is logged, never leaked.
            error!(brand = %brand.name, error = %e, "color-scheme generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to generate color scheme" })),
            )
                .into_response()
        }
    }
}

/// POST /api/projects
pub(super) async fn create_project(
    State(state): State<AppState>,
    Json(new): Json<NewProject>,
) -> Response {
    // A project must reference a catalog brand.
    match state.store.get_brand(new.brand_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (StatusCode::NOT_FOUND, json_error("not_found", "brand not found"))
                .into_response();
        }
        Err(e) => return storage_failure("check project brand", e),
    }

    match state.store.create_project(&new) {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => storage_failure("create project", e),
    }
}

/// GET /api/projects
pub(super) async fn list_projects(State(state): State<AppState>) -> Response {
    match state.store.list_projects() {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(e) => storage_failure("list projects", e),
    }
}

/// GET /api/projects/{id}
pub(super) async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_project(&id) {
        Ok(Some(project)) => (StatusCode::OK, Json(project)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, json_error("not_found", "project not found"))
            .into_response(),
        Err(e) => storage_failure("get project", e),
    }
}
