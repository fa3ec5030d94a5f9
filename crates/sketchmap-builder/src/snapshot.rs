//! Snapshot and report views emitted after each batch.
//!
//! The visualization layer receives the full node/edge set every time (not
//! a diff) and reconciles additions against what it already renders, by
//! node id. Views are serialize-only projections of the core types.

use serde::Serialize;

use sketchmap_core::{ConceptGraph, ConceptId, EdgeId, NodeTier, Position};

/// One node as the visualization layer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: ConceptId,
    pub label: String,
    pub tier: NodeTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub position: Position,
    pub child_count: u32,
}

/// One child-to-parent edge.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub id: EdgeId,
    pub source: ConceptId,
    pub target: ConceptId,
}

/// The full node/edge set after a batch, root included so every edge has
/// both endpoints present. Node order is insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphSnapshot {
    /// Projects the current graph state into a snapshot.
    pub fn of(graph: &ConceptGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeView {
                id: node.id,
                label: node.label.clone(),
                tier: node.tier,
                explanation: node.explanation.clone(),
                position: node.position,
                child_count: node.child_count,
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(id, source, target)| EdgeView { id, source, target })
            .collect();

        GraphSnapshot { nodes, edges }
    }
}

/// What happened to one record of a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RecordOutcome {
    /// The record became a new node.
    Created {
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_id: Option<String>,
        id: ConceptId,
    },
    /// The record merged into an existing node.
    Merged {
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_id: Option<String>,
        into: ConceptId,
    },
    /// The record was invalid and skipped.
    Skipped {
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_id: Option<String>,
        reason: String,
    },
}

/// Per-batch accounting, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub created: usize,
    pub merged: usize,
    pub skipped: usize,
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub(crate) fn push(&mut self, outcome: RecordOutcome) {
        match &outcome {
            RecordOutcome::Created { .. } => self.created += 1,
            RecordOutcome::Merged { .. } => self.merged += 1,
            RecordOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }
}

/// Everything a caller gets back from one `process_batch` call.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub snapshot: GraphSnapshot,
    pub report: BatchReport,
}
