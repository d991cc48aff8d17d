//! Axum route handlers for the session lifecycle.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::strategy::handlers::ProductSummary;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    /// True when no deployment key exists — the page must collect one
    /// before the form unlocks.
    pub credential_required: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetApiKeyRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshotResponse {
    pub session_id: Uuid,
    pub credential_required: bool,
    pub products: Vec<ProductSummary>,
    pub has_strategy: bool,
    pub created_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/session
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionCreatedResponse> {
    let session_id = state.sessions.create();
    Json(SessionCreatedResponse {
        session_id,
        credential_required: state.config.gemini_api_key.is_none(),
    })
}

/// POST /api/v1/session/:id/key
///
/// Stores a user-supplied API key in the session. Only consulted when no
/// deployment key is configured.
pub async fn handle_set_api_key(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetApiKeyRequest>,
) -> Result<Json<Value>, AppError> {
    if request.api_key.trim().is_empty() {
        return Err(AppError::Validation("api_key cannot be empty".to_string()));
    }
    if !state.sessions.set_api_key(session_id, request.api_key) {
        return Err(AppError::NotFound(format!("Session {session_id} not found")));
    }
    Ok(Json(json!({"status": "ok"})))
}

/// GET /api/v1/session/:id
///
/// Snapshot for the page: credential state, the products panel, and whether
/// a strategy is available for download.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(SessionSnapshotResponse {
        session_id,
        credential_required: state.config.gemini_api_key.is_none() && session.api_key.is_none(),
        products: session.products.iter().map(ProductSummary::from).collect(),
        has_strategy: session.strategy.is_some(),
        created_at: session.created_at,
    }))
}

/// DELETE /api/v1/session/:id
///
/// The "New Analysis" reset: discards every piece of session state.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !state.sessions.remove(session_id) {
        return Err(AppError::NotFound(format!("Session {session_id} not found")));
    }
    Ok(Json(json!({"status": "reset"})))
}
