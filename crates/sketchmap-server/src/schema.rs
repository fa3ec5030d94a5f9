//! Request/response types for the HTTP API.
//!
//! Snapshot and report bodies reuse the serialize-only views from
//! `sketchmap-builder` directly; the types here cover only what the
//! transport adds (session ids, drag coordinates, layout input).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sketchmap_core::ConceptRecord;

/// Request to open a recording session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Optional merge-threshold override in `[0, 1]`.
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Response carrying the new session's id.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// One batch of concept records from the extraction service.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessBatchRequest {
    pub concepts: Vec<ConceptRecord>,
}

/// User-drag position writeback.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPositionRequest {
    pub x: f64,
    pub y: f64,
}

/// Full-batch layout input (demo rendering path).
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutRequest {
    pub concepts: Vec<ConceptRecord>,
}
