//! ConceptGraph: the owned, session-lifetime graph state.
//!
//! [`ConceptGraph`] holds every accepted concept node and its single
//! child-to-parent edge in one `StableGraph`, rooted at a synthetic root
//! node. All mutations go through `ConceptGraph` methods so the forest
//! invariants hold: every non-root node has exactly one outgoing edge to
//! its parent, canonical ids are unique, and `child_count` matches the
//! number of edges targeting a node.
//!
//! The graph also keeps a session-lifetime alias table from raw record ids
//! to canonical ids, so a batch may reference a raw id introduced by an
//! earlier batch as a `parent`.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{ConceptId, EdgeId};
use crate::node::{ConceptNode, NodeTier, ParentLink, Position};

/// Label given to the synthetic root node.
pub const ROOT_LABEL: &str = "center";

/// The session-lifetime concept graph.
///
/// Nodes are never removed within a session; a session reset replaces the
/// whole graph with a fresh root-only instance. Because the graph is
/// append-only, petgraph node indices are stable and insertion-ordered,
/// which makes candidate iteration during dedup deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptGraph {
    /// Nodes and child->parent edges.
    graph: StableGraph<ConceptNode, ParentLink, Directed, u32>,
    /// The synthetic root's id.
    root: ConceptId,
    /// Raw record id -> canonical id, accumulated across batches.
    aliases: HashMap<String, ConceptId>,
}

impl ConceptGraph {
    /// Creates a graph containing only the synthetic root at the origin.
    pub fn new() -> Self {
        let mut graph = StableGraph::<ConceptNode, ParentLink, Directed, u32>::new();

        // The root is inserted first, so it always gets ConceptId(0).
        let root_idx = graph.add_node(ConceptNode::new(
            ConceptId(0),
            ROOT_LABEL.to_string(),
            NodeTier::Root,
            None,
            Position::ORIGIN,
        ));

        ConceptGraph {
            graph,
            root: ConceptId::from(root_idx),
            aliases: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns the synthetic root's id.
    pub fn root_id(&self) -> ConceptId {
        self.root
    }

    /// Looks up a node by canonical id.
    pub fn node(&self, id: ConceptId) -> Option<&ConceptNode> {
        let idx: NodeIndex<u32> = id.into();
        self.graph.node_weight(idx)
    }

    /// Returns `true` if the id names a node in the graph.
    pub fn contains(&self, id: ConceptId) -> bool {
        self.node(id).is_some()
    }

    /// Iterates all nodes (root included) in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConceptNode> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Iterates dedup candidates: `(canonical id, label)` for every
    /// accepted concept. The root is not a merge candidate.
    pub fn candidates(&self) -> impl Iterator<Item = (ConceptId, &str)> {
        self.nodes()
            .filter(|n| !n.is_root())
            .map(|n| (n.id, n.label.as_str()))
    }

    /// Iterates all parent edges as `(edge id, child, parent)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, ConceptId, ConceptId)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                EdgeId::from(edge.id()),
                ConceptId::from(edge.source()),
                ConceptId::from(edge.target()),
            )
        })
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of accepted concepts (root excluded).
    pub fn concept_count(&self) -> usize {
        self.graph.node_count() - 1
    }

    /// Returns the number of parent edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the parent of a node, or `None` for the root (or an unknown
    /// id).
    pub fn parent_of(&self, id: ConceptId) -> Option<ConceptId> {
        let idx: NodeIndex<u32> = id.into();
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .next()
            .map(|edge| ConceptId::from(edge.target()))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Accepts a new concept under `parent`, wiring its parent edge and
    /// bumping the parent's child counter.
    ///
    /// Returns the new canonical id. Errors if the parent does not exist.
    pub fn add_concept(
        &mut self,
        label: String,
        tier: NodeTier,
        explanation: Option<String>,
        position: Position,
        parent: ConceptId,
    ) -> Result<ConceptId, CoreError> {
        let parent_idx: NodeIndex<u32> = parent.into();
        if self.graph.node_weight(parent_idx).is_none() {
            return Err(CoreError::NodeNotFound { id: parent });
        }

        // Reserve the index first so the node can carry its own id.
        let idx = self.graph.add_node(ConceptNode::new(
            ConceptId(0),
            label,
            tier,
            explanation,
            position,
        ));
        let id = ConceptId::from(idx);
        self.graph[idx].id = id;

        self.graph.add_edge(idx, parent_idx, ParentLink);
        self.graph[parent_idx].child_count += 1;

        Ok(id)
    }

    /// Overwrites a node's position (user drag writeback).
    ///
    /// The core assigns each position exactly once, at placement; after
    /// that the visualization layer is the sole mutator, through this
    /// method. The root is fixed at the origin.
    pub fn set_position(&mut self, id: ConceptId, position: Position) -> Result<(), CoreError> {
        if id == self.root {
            return Err(CoreError::RootImmutable);
        }
        let idx: NodeIndex<u32> = id.into();
        match self.graph.node_weight_mut(idx) {
            Some(node) => {
                node.position = position;
                Ok(())
            }
            None => Err(CoreError::NodeNotFound { id }),
        }
    }

    /// Binds a raw record id to a canonical id for the rest of the session.
    /// A later batch reusing the raw id overwrites the binding.
    pub fn bind_alias(&mut self, raw_id: String, id: ConceptId) {
        self.aliases.insert(raw_id, id);
    }

    /// Resolves a raw record id bound by any earlier batch.
    pub fn resolve_alias(&self, raw_id: &str) -> Option<ConceptId> {
        self.aliases.get(raw_id).copied()
    }
}

impl Default for ConceptGraph {
    fn default() -> Self {
        ConceptGraph::new()
    }
}
