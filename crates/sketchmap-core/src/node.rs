//! Node and edge weight types for the concept graph.
//!
//! [`ConceptNode`] is the persistent, session-lifetime form of an accepted
//! concept: canonical id, display fields, assigned position, and the
//! child counter the radial placement uses to fan out siblings.
//! [`ParentLink`] is the edge weight on the single child-to-parent edge
//! every non-root node carries.

use serde::{Deserialize, Serialize};

use crate::id::ConceptId;
use crate::record::ConceptKind;

/// Hierarchy tier of an accepted graph node.
///
/// Unlike [`ConceptKind`], this includes the synthetic root and has no
/// unknown variant -- the permissive default is applied exactly once, in
/// the `From<ConceptKind>` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTier {
    /// The synthetic root; exists once per session, never placed or merged.
    Root,
    /// Top-level topic.
    Main,
    /// Mid-tier concept.
    Concept,
    /// Leaf detail.
    Detail,
}

impl From<ConceptKind> for NodeTier {
    fn from(kind: ConceptKind) -> Self {
        match kind {
            ConceptKind::Main => NodeTier::Main,
            ConceptKind::Concept | ConceptKind::Unknown => NodeTier::Concept,
            ConceptKind::Detail => NodeTier::Detail,
        }
    }
}

/// A 2-D position on the rendering canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The canvas origin, where the synthetic root sits.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Returns `true` if this is the origin (used to detect a root parent
    /// when deriving the fan-out ray).
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// An accepted concept node, persistent for the session lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Canonical id, assigned on first acceptance and reused by merges.
    pub id: ConceptId,
    /// Display label (the wording of the first record accepted).
    pub label: String,
    /// Hierarchy tier.
    pub tier: NodeTier,
    /// Optional one-line explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Initial position assigned at placement. After that, only the
    /// visualization layer (user drag) mutates it.
    pub position: Position,
    /// Number of children placed under this node so far. Incremented once
    /// per placed child, never decremented.
    pub child_count: u32,
}

impl ConceptNode {
    /// Creates a node with no children yet.
    pub fn new(
        id: ConceptId,
        label: String,
        tier: NodeTier,
        explanation: Option<String>,
        position: Position,
    ) -> Self {
        ConceptNode {
            id,
            label,
            tier,
            explanation,
            position,
            child_count: 0,
        }
    }

    /// Returns `true` for the synthetic root node.
    pub fn is_root(&self) -> bool {
        self.tier == NodeTier::Root
    }
}

/// Edge weight on the child-to-parent edge of every non-root node.
///
/// The direction is child -> parent: a node's single outgoing edge points
/// at its resolved parent, and a parent's `child_count` equals the number
/// of edges targeting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink;
