//! Session lifecycle handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema::{CreateSessionRequest, CreateSessionResponse};
use crate::state::AppState;

/// Opens a new recording session.
///
/// `POST /sessions`
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    if let Some(t) = req.threshold {
        if !(0.0..=1.0).contains(&t) {
            return Err(ApiError::BadRequest(format!(
                "threshold must be in [0, 1], got {}",
                t
            )));
        }
    }

    let session_id = state.create_session(req.threshold);
    tracing::info!(%session_id, "session created");
    Ok(Json(CreateSessionResponse { session_id }))
}

/// Discards a session and its graph.
///
/// `DELETE /sessions/{id}`
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.remove_session(session_id) {
        return Err(ApiError::NotFound(format!("session {}", session_id)));
    }
    tracing::info!(%session_id, "session discarded");
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Atomically replaces a session's graph with a fresh root-only state.
///
/// `POST /sessions/{id}/reset`
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let handle = state
        .session(session_id)
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    handle.lock().await.reset();
    tracing::info!(%session_id, "session reset");
    Ok(Json(serde_json::json!({ "success": true })))
}
