//! Stable ID newtypes for graph entities.
//!
//! Both IDs are distinct newtype wrappers over `u32`, providing type safety
//! so that a `ConceptId` cannot be accidentally used where an `EdgeId` is
//! expected. A `ConceptId` is the canonical identifier of an accepted
//! concept: it is assigned when a concept first enters the graph and reused
//! for every later record merged into it.

use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};

/// Canonical concept identifier. Maps to a petgraph `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptId(pub u32);

/// Stable parent-edge identifier. Maps to a petgraph `EdgeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

// Display implementations -- just print the inner value.

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Bridges to petgraph's index types.

impl From<NodeIndex<u32>> for ConceptId {
    fn from(idx: NodeIndex<u32>) -> Self {
        ConceptId(idx.index() as u32)
    }
}

impl From<ConceptId> for NodeIndex<u32> {
    fn from(id: ConceptId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}

impl From<EdgeIndex<u32>> for EdgeId {
    fn from(idx: EdgeIndex<u32>) -> Self {
        EdgeId(idx.index() as u32)
    }
}

impl From<EdgeId> for EdgeIndex<u32> {
    fn from(id: EdgeId) -> Self {
        EdgeIndex::new(id.0 as usize)
    }
}
