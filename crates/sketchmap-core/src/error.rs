//! Core error types for sketchmap-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Batch
//! processing deliberately produces very few errors -- malformed input
//! degrades instead of failing -- so the variants here cover direct graph
//! API misuse only.

use crate::id::ConceptId;
use thiserror::Error;

/// Core errors produced by the sketchmap-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A concept id was not found in the graph.
    #[error("concept not found: ConceptId({id})", id = id.0)]
    NodeNotFound { id: ConceptId },

    /// The synthetic root cannot be repositioned.
    #[error("the synthetic root cannot be repositioned")]
    RootImmutable,
}
