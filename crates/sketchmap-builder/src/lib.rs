//! Incremental concept graph builder.
//!
//! [`GraphBuilder`] owns the live graph state for one recording session
//! and turns each incoming batch of concept records into accepted nodes
//! and edges: fuzzy dedup first, then parent resolution through a
//! per-batch remap table, then O(1) radial placement for genuinely new
//! nodes. After every batch it emits a full [`GraphSnapshot`] for the
//! visualization layer plus a [`BatchReport`] of per-record outcomes.

pub mod builder;
pub mod snapshot;

pub use builder::GraphBuilder;
pub use snapshot::{BatchReport, BatchResult, EdgeView, GraphSnapshot, NodeView, RecordOutcome};
