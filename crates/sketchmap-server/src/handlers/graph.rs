//! Batch ingestion, snapshot, and position writeback handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use sketchmap_builder::{BatchResult, GraphSnapshot};
use sketchmap_core::{ConceptId, Position};

use crate::error::ApiError;
use crate::schema::{ProcessBatchRequest, SetPositionRequest};
use crate::state::{AppState, SessionHandle};

fn lookup(state: &AppState, session_id: Uuid) -> Result<SessionHandle, ApiError> {
    state
        .session(session_id)
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))
}

/// Applies one batch of concept records to a session's graph.
///
/// `POST /sessions/{id}/batches`
///
/// Always succeeds for a live session: malformed records degrade and are
/// itemized in the returned report rather than failing the batch.
pub async fn process_batch(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ProcessBatchRequest>,
) -> Result<Json<BatchResult>, ApiError> {
    let handle = lookup(&state, session_id)?;
    let result = handle.lock().await.process_batch(&req.concepts);
    Ok(Json(result))
}

/// Returns the current full node/edge snapshot.
///
/// `GET /sessions/{id}/snapshot`
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphSnapshot>, ApiError> {
    let handle = lookup(&state, session_id)?;
    let snapshot = handle.lock().await.snapshot();
    Ok(Json(snapshot))
}

/// Writes back a user-dragged node position.
///
/// `PUT /sessions/{id}/nodes/{node_id}/position`
pub async fn set_position(
    State(state): State<AppState>,
    Path((session_id, node_id)): Path<(Uuid, u32)>,
    Json(req): Json<SetPositionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let handle = lookup(&state, session_id)?;
    handle
        .lock()
        .await
        .set_position(ConceptId(node_id), Position::new(req.x, req.y))?;
    Ok(Json(serde_json::json!({ "success": true })))
}
