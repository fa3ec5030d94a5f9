//! HTTP adapter for the incremental concept graph builder.
//!
//! The server is the seam between the external transport (which delivers
//! concept batches) and the in-memory graph core. It owns one
//! [`GraphBuilder`](sketchmap_builder::GraphBuilder) per recording
//! session and exposes batch ingestion, snapshot queries, position
//! writeback for user drags, and a stateless full-batch layout endpoint
//! for demo rendering. All algorithmic logic lives in the library crates;
//! handlers are thin.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
