//! The per-batch build loop: dedup, remap, place, emit.

use indexmap::IndexMap;

use sketchmap_core::{
    find_best_match, ConceptGraph, ConceptId, ConceptRecord, CoreError, NodeTier, Position,
    DEFAULT_THRESHOLD,
};
use sketchmap_layout::place_child;

use crate::snapshot::{BatchReport, BatchResult, GraphSnapshot, RecordOutcome};

/// Owns the live graph state for one recording session.
///
/// Batches are applied strictly in arrival order by a single caller; the
/// builder holds no locks of its own. All recoverable input problems
/// degrade to a best-effort graph: blank labels are skipped, unresolvable
/// parents attach to the synthetic root, duplicate raw ids overwrite
/// earlier remap entries.
pub struct GraphBuilder {
    graph: ConceptGraph,
    threshold: f64,
}

impl GraphBuilder {
    /// Creates a builder with the default merge threshold.
    pub fn new() -> Self {
        GraphBuilder::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Creates a builder with a custom merge threshold in `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Self {
        GraphBuilder {
            graph: ConceptGraph::new(),
            threshold,
        }
    }

    /// Returns the current graph state.
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Returns the merge threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Processes one batch of concept records.
    ///
    /// Records are visited in tier order (main before concept before
    /// detail, stable within a tier) so a parent is in the remap table
    /// before any same-batch child references it. Each record is first
    /// matched against every accepted node's label -- including nodes
    /// accepted earlier in this same batch, so near-duplicate records
    /// within one batch merge against each other.
    pub fn process_batch(&mut self, records: &[ConceptRecord]) -> BatchResult {
        let mut remap: IndexMap<String, ConceptId> = IndexMap::new();
        let mut report = BatchReport::default();

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by_key(|&i| records[i].kind.rank());

        for i in order {
            let record = &records[i];

            if record.has_blank_label() {
                tracing::warn!(raw_id = ?record.id, "skipping record with blank label");
                report.push(RecordOutcome::Skipped {
                    raw_id: record.id.clone(),
                    reason: "blank label".to_string(),
                });
                continue;
            }

            if let Some(target) = find_best_match(&record.label, self.graph.candidates(), self.threshold) {
                self.bind(record.id.as_deref(), target, &mut remap);
                report.push(RecordOutcome::Merged {
                    raw_id: record.id.clone(),
                    into: target,
                });
                continue;
            }

            let parent = self.resolve_parent(record, &remap);
            match self.place_and_insert(record, parent) {
                Ok(id) => {
                    self.bind(record.id.as_deref(), id, &mut remap);
                    report.push(RecordOutcome::Created {
                        raw_id: record.id.clone(),
                        id,
                    });
                }
                Err(err) => {
                    tracing::warn!(raw_id = ?record.id, error = %err, "record could not be placed");
                    report.push(RecordOutcome::Skipped {
                        raw_id: record.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            created = report.created,
            merged = report.merged,
            skipped = report.skipped,
            "batch processed"
        );

        BatchResult {
            snapshot: self.snapshot(),
            report,
        }
    }

    /// Projects the current state into a full snapshot.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::of(&self.graph)
    }

    /// Writes back a user-dragged position. The core never overwrites a
    /// position once assigned, so drags survive subsequent batches.
    pub fn set_position(&mut self, id: ConceptId, position: Position) -> Result<(), CoreError> {
        self.graph.set_position(id, position)
    }

    /// Atomically replaces the graph with a fresh root-only state.
    pub fn reset(&mut self) {
        self.graph = ConceptGraph::new();
    }

    /// Resolves a record's parent: the batch remap table first, then the
    /// session alias table, then the synthetic root. `main` concepts are
    /// roots by definition and skip resolution entirely.
    fn resolve_parent(&self, record: &ConceptRecord, remap: &IndexMap<String, ConceptId>) -> ConceptId {
        if NodeTier::from(record.kind) == NodeTier::Main {
            return self.graph.root_id();
        }
        record
            .parent
            .as_deref()
            .and_then(|p| remap.get(p).copied().or_else(|| self.graph.resolve_alias(p)))
            .unwrap_or_else(|| self.graph.root_id())
    }

    /// Places a new node under `parent` and inserts it with its edge.
    fn place_and_insert(
        &mut self,
        record: &ConceptRecord,
        parent: ConceptId,
    ) -> Result<ConceptId, CoreError> {
        let parent_node = self
            .graph
            .node(parent)
            .ok_or(CoreError::NodeNotFound { id: parent })?;

        let tier = NodeTier::from(record.kind);
        let position = place_child(parent_node.position, parent_node.child_count, tier);

        self.graph.add_concept(
            record.label.trim().to_string(),
            tier,
            record.explanation.clone(),
            position,
            parent,
        )
    }

    /// Binds a record's raw id to its canonical id, in both the per-batch
    /// remap table and the session alias table. A duplicate raw id within
    /// one batch overwrites the earlier entry.
    fn bind(&mut self, raw_id: Option<&str>, id: ConceptId, remap: &mut IndexMap<String, ConceptId>) {
        if let Some(raw) = raw_id {
            remap.insert(raw.to_string(), id);
            self.graph.bind_alias(raw.to_string(), id);
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder::new()
    }
}
