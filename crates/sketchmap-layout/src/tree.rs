//! Full-batch tree layout.
//!
//! A pure two-pass layout over one complete concept set, keyed by the
//! records' raw ids. Pass one computes each subtree's total horizontal
//! footprint bottom-up (memoized, O(n)); pass two walks the forest
//! depth-first assigning x-coordinates from the running total of preceding
//! siblings' footprints, with a fixed y increment per depth level.
//!
//! Records with no parent (or of `main` kind) attach to the synthetic
//! root. A parent reference is honored only when it names a record in a
//! strictly higher tier; anything else degrades to the root rather than
//! rejecting the record, so a malformed hierarchy flattens instead of
//! failing the batch. The tier guard also rules out reference cycles
//! structurally.

use std::collections::HashMap;

use serde::Serialize;

use sketchmap_core::{ConceptRecord, NodeTier, Position};

use crate::size::estimate_extent;

/// Vertical distance between consecutive depth levels.
pub const LEVEL_HEIGHT: f64 = 150.0;
/// Horizontal margin added around each node's own extent.
pub const SIBLING_MARGIN: f64 = 24.0;
/// Smallest footprint any subtree is allotted.
pub const MIN_FOOTPRINT: f64 = 80.0;

/// Key of the synthetic root in layout output.
pub const ROOT_KEY: &str = "center";

/// A laid-out node keyed by its raw record id.
#[derive(Debug, Clone, Serialize)]
pub struct PositionedNode {
    /// Raw record id, or `node-{index}` when the record carried none.
    pub id: String,
    pub label: String,
    pub tier: NodeTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub position: Position,
}

/// One child-to-parent edge in the laid-out forest.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    /// The child's key.
    pub source: String,
    /// The resolved parent's key (the root key for top-level nodes).
    pub target: String,
}

/// The complete output of one full-batch layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Lays out one complete concept set.
///
/// Deterministic: identical input yields identical positions. Records with
/// blank labels are dropped. An empty input produces an empty result. The
/// synthetic root is emitted as the first node so every edge has both
/// endpoints present.
pub fn layout(records: &[ConceptRecord]) -> LayoutResult {
    if records.is_empty() {
        return LayoutResult {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
    }

    // Keys and the key -> record index map. A duplicated raw id resolves
    // to its last occurrence, matching the builder's overwrite rule.
    let keys: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| r.id.clone().unwrap_or_else(|| format!("node-{}", i)))
        .collect();
    let mut by_key: HashMap<&str, usize> = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        by_key.insert(key.as_str(), i);
    }

    let tiers: Vec<NodeTier> = records.iter().map(|r| NodeTier::from(r.kind)).collect();

    // Parent resolution with the tier guard; `None` means the root.
    let mut parents: Vec<Option<usize>> = vec![None; records.len()];
    for (i, record) in records.iter().enumerate() {
        if record.has_blank_label() || tiers[i] == NodeTier::Main {
            continue;
        }
        parents[i] = record
            .parent
            .as_deref()
            .and_then(|p| by_key.get(p).copied())
            .filter(|&j| j != i && !records[j].has_blank_label())
            .filter(|&j| records[j].kind.rank() < records[i].kind.rank());
    }

    // Parent -> children adjacency, in record order.
    let mut root_children: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    for (i, record) in records.iter().enumerate() {
        if record.has_blank_label() {
            continue;
        }
        match parents[i] {
            Some(parent) => children[parent].push(i),
            None => root_children.push(i),
        }
    }

    // Pass one: memoized subtree footprints.
    let mut footprints: HashMap<usize, f64> = HashMap::new();
    for &top in &root_children {
        subtree_footprint(top, records, &tiers, &children, &mut footprints);
    }

    // Pass two: depth-first coordinate assignment, root at the origin.
    let mut positions: Vec<Position> = vec![Position::ORIGIN; records.len()];
    let total: f64 = root_children.iter().map(|&i| footprints[&i]).sum();
    let mut cursor = -total / 2.0;
    for &top in &root_children {
        let footprint = footprints[&top];
        place_subtree(
            top,
            cursor + footprint / 2.0,
            1,
            &children,
            &footprints,
            &mut positions,
        );
        cursor += footprint;
    }

    // Emit the root first, then every valid record in input order.
    let mut nodes = Vec::with_capacity(records.len() + 1);
    nodes.push(PositionedNode {
        id: ROOT_KEY.to_string(),
        label: ROOT_KEY.to_string(),
        tier: NodeTier::Root,
        explanation: None,
        position: Position::ORIGIN,
    });

    let mut edges = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if record.has_blank_label() {
            continue;
        }
        nodes.push(PositionedNode {
            id: keys[i].clone(),
            label: record.label.clone(),
            tier: tiers[i],
            explanation: record.explanation.clone(),
            position: positions[i],
        });

        let target = match parents[i] {
            Some(parent) => keys[parent].clone(),
            None => ROOT_KEY.to_string(),
        };
        edges.push(LayoutEdge {
            id: format!("edge-{}-{}", keys[i], target),
            source: keys[i].clone(),
            target,
        });
    }

    LayoutResult { nodes, edges }
}

/// Computes (and memoizes) the total horizontal footprint of a subtree.
///
/// A leaf's footprint is its own estimated width plus the sibling margin;
/// an internal node's footprint is the larger of its own width and the sum
/// of its children's footprints, floored at [`MIN_FOOTPRINT`].
fn subtree_footprint(
    node: usize,
    records: &[ConceptRecord],
    tiers: &[NodeTier],
    children: &[Vec<usize>],
    memo: &mut HashMap<usize, f64>,
) -> f64 {
    if let Some(&footprint) = memo.get(&node) {
        return footprint;
    }

    let own = estimate_extent(&records[node].label, tiers[node]).width + SIBLING_MARGIN;
    let child_total: f64 = children[node]
        .iter()
        .map(|&child| subtree_footprint(child, records, tiers, children, memo))
        .sum();

    let footprint = own.max(child_total).max(MIN_FOOTPRINT);
    memo.insert(node, footprint);
    footprint
}

/// Assigns coordinates to a subtree centered at `center_x`, children
/// spread left-to-right by cumulative footprint.
fn place_subtree(
    node: usize,
    center_x: f64,
    depth: u32,
    children: &[Vec<usize>],
    footprints: &HashMap<usize, f64>,
    positions: &mut Vec<Position>,
) {
    positions[node] = Position::new(center_x, f64::from(depth) * LEVEL_HEIGHT);

    let child_total: f64 = children[node].iter().map(|&c| footprints[&c]).sum();
    let mut cursor = center_x - child_total / 2.0;
    for &child in &children[node] {
        let footprint = footprints[&child];
        place_subtree(
            child,
            cursor + footprint / 2.0,
            depth + 1,
            children,
            footprints,
            positions,
        );
        cursor += footprint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchmap_core::ConceptKind;

    fn record(id: &str, label: &str, kind: ConceptKind, parent: Option<&str>) -> ConceptRecord {
        ConceptRecord {
            id: Some(id.to_string()),
            label: label.to_string(),
            kind,
            parent: parent.map(str::to_string),
            explanation: None,
        }
    }

    fn demo_set() -> Vec<ConceptRecord> {
        vec![
            record("m1", "React", ConceptKind::Main, None),
            record("m2", "TypeScript", ConceptKind::Main, None),
            record("c1", "Hooks", ConceptKind::Concept, Some("m1")),
            record("c2", "Components", ConceptKind::Concept, Some("m1")),
            record("c3", "Generics", ConceptKind::Concept, Some("m2")),
            record("d1", "useState", ConceptKind::Detail, Some("c1")),
            record("d2", "useEffect", ConceptKind::Detail, Some("c1")),
        ]
    }

    fn position_of<'a>(result: &'a LayoutResult, id: &str) -> &'a PositionedNode {
        result
            .nodes
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("missing node {}", id))
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let result = layout(&[]);
        assert!(result.nodes.is_empty());
        assert!(result.edges.is_empty());
    }

    #[test]
    fn layout_is_deterministic() {
        let records = demo_set();
        let first = layout(&records);
        let second = layout(&records);

        assert_eq!(first.nodes.len(), second.nodes.len());
        for (a, b) in first.nodes.iter().zip(second.nodes.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn depth_maps_to_level_height() {
        let result = layout(&demo_set());
        assert_eq!(position_of(&result, "center").position.y, 0.0);
        assert_eq!(position_of(&result, "m1").position.y, LEVEL_HEIGHT);
        assert_eq!(position_of(&result, "c1").position.y, 2.0 * LEVEL_HEIGHT);
        assert_eq!(position_of(&result, "d1").position.y, 3.0 * LEVEL_HEIGHT);
    }

    #[test]
    fn sibling_subtrees_do_not_overlap() {
        let result = layout(&demo_set());

        // m1's whole subtree sits on one side of m2's.
        let m1_xs: Vec<f64> = ["m1", "c1", "c2", "d1", "d2"]
            .iter()
            .map(|id| position_of(&result, id).position.x)
            .collect();
        let m2_xs: Vec<f64> = ["m2", "c3"]
            .iter()
            .map(|id| position_of(&result, id).position.x)
            .collect();

        let m1_max = m1_xs.iter().cloned().fold(f64::MIN, f64::max);
        let m2_min = m2_xs.iter().cloned().fold(f64::MAX, f64::min);
        assert!(
            m1_max < m2_min,
            "subtrees interleave: m1 max {} vs m2 min {}",
            m1_max,
            m2_min
        );
    }

    #[test]
    fn sibling_boxes_are_separated() {
        let result = layout(&demo_set());
        let c1 = position_of(&result, "c1");
        let c2 = position_of(&result, "c2");

        let w1 = estimate_extent(&c1.label, c1.tier).width;
        let w2 = estimate_extent(&c2.label, c2.tier).width;
        assert!((c1.position.x - c2.position.x).abs() >= (w1 + w2) / 2.0);
    }

    #[test]
    fn one_edge_per_non_root_node() {
        let records = demo_set();
        let result = layout(&records);

        assert_eq!(result.edges.len(), records.len());
        assert_eq!(result.nodes.len(), records.len() + 1);

        let edge = result.edges.iter().find(|e| e.source == "c1").unwrap();
        assert_eq!(edge.target, "m1");
    }

    #[test]
    fn unresolvable_parent_attaches_to_root() {
        let records = vec![record("c1", "JSX", ConceptKind::Concept, Some("ghost"))];
        let result = layout(&records);

        let edge = &result.edges[0];
        assert_eq!(edge.source, "c1");
        assert_eq!(edge.target, ROOT_KEY);
    }

    #[test]
    fn same_tier_parent_reference_degrades_to_root() {
        // A concept naming another concept as its parent flattens.
        let records = vec![
            record("c1", "Hooks", ConceptKind::Concept, None),
            record("c2", "Effects", ConceptKind::Concept, Some("c1")),
        ];
        let result = layout(&records);
        let edge = result.edges.iter().find(|e| e.source == "c2").unwrap();
        assert_eq!(edge.target, ROOT_KEY);
    }

    #[test]
    fn main_records_ignore_declared_parents() {
        let records = vec![
            record("m1", "React", ConceptKind::Main, None),
            record("m2", "Redux", ConceptKind::Main, Some("m1")),
        ];
        let result = layout(&records);
        let edge = result.edges.iter().find(|e| e.source == "m2").unwrap();
        assert_eq!(edge.target, ROOT_KEY);
    }

    #[test]
    fn blank_labels_are_dropped() {
        let records = vec![
            record("m1", "React", ConceptKind::Main, None),
            record("x", "   ", ConceptKind::Concept, Some("m1")),
        ];
        let result = layout(&records);
        assert_eq!(result.nodes.len(), 2); // root + m1
        assert_eq!(result.edges.len(), 1);
    }

    #[test]
    fn records_without_ids_get_synthetic_keys() {
        let records = vec![ConceptRecord {
            id: None,
            label: "React".into(),
            kind: ConceptKind::Main,
            parent: None,
            explanation: None,
        }];
        let result = layout(&records);
        assert!(result.nodes.iter().any(|n| n.id == "node-0"));
    }

    #[test]
    fn result_serializes_for_the_wire() {
        let result = layout(&[record("m1", "React", ConceptKind::Main, None)]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["nodes"][0]["id"], "center");
        assert_eq!(value["nodes"][0]["tier"], "root");
        assert_eq!(value["nodes"][1]["tier"], "main");
        assert_eq!(value["edges"][0]["target"], "center");
    }

    #[test]
    fn unknown_kind_is_laid_out_as_concept() {
        let records = vec![
            record("m1", "React", ConceptKind::Main, None),
            record("u1", "Mystery", ConceptKind::Unknown, Some("m1")),
        ];
        let result = layout(&records);
        let node = position_of(&result, "u1");
        assert_eq!(node.tier, NodeTier::Concept);
        let edge = result.edges.iter().find(|e| e.source == "u1").unwrap();
        assert_eq!(edge.target, "m1");
    }
}
