//! Input record types produced by the external concept extraction service.
//!
//! A [`ConceptRecord`] is one unit of a batch pushed over the transport.
//! Its `id` is assigned by the extraction service and is only unique within
//! one batch; the `parent` field may name a raw id from the current batch
//! or from an earlier one. Raw ids are resolved to canonical [`ConceptId`]s
//! by the graph builder, never used as graph identity directly.
//!
//! [`ConceptId`]: crate::id::ConceptId

use serde::{Deserialize, Serialize};

/// The declared tier of an incoming concept.
///
/// The extraction service emits a strict 3-level hierarchy: `main` concepts
/// are roots, `concept` nodes attach to a `main`, `detail` nodes attach to
/// a `concept`. Any other string deserializes to [`ConceptKind::Unknown`]
/// rather than failing the record; unknown kinds are ranked and laid out as
/// the `concept` tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptKind {
    /// Top-level topic, attaches to the synthetic root.
    Main,
    /// Mid-tier concept, attaches to a `main`.
    Concept,
    /// Leaf detail, attaches to a `concept`.
    Detail,
    /// Unrecognized tier string, treated as the `concept` tier.
    #[serde(other)]
    Unknown,
}

impl ConceptKind {
    /// Processing rank: parents sort before the children that reference
    /// them within one batch. Lower ranks are processed first.
    pub fn rank(&self) -> u8 {
        match self {
            ConceptKind::Main => 0,
            ConceptKind::Concept | ConceptKind::Unknown => 1,
            ConceptKind::Detail => 2,
        }
    }
}

/// One concept emitted by the extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// Raw id assigned by the extraction service. Unique only within one
    /// batch; not stable across batches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label. A record with a blank label is invalid and skipped.
    pub label: String,
    /// Declared hierarchy tier.
    #[serde(rename = "type")]
    pub kind: ConceptKind,
    /// Raw id of the parent concept, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Optional one-line explanation shown alongside the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ConceptRecord {
    /// Returns `true` if the label is missing meaningful content.
    pub fn has_blank_label(&self) -> bool {
        self.label.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_deserializes_lowercase() {
        let k: ConceptKind = serde_json::from_str("\"main\"").unwrap();
        assert_eq!(k, ConceptKind::Main);
        let k: ConceptKind = serde_json::from_str("\"detail\"").unwrap();
        assert_eq!(k, ConceptKind::Detail);
    }

    #[test]
    fn unknown_kind_falls_back() {
        let k: ConceptKind = serde_json::from_str("\"topic\"").unwrap();
        assert_eq!(k, ConceptKind::Unknown);
    }

    #[test]
    fn rank_orders_parents_first() {
        assert!(ConceptKind::Main.rank() < ConceptKind::Concept.rank());
        assert!(ConceptKind::Concept.rank() < ConceptKind::Detail.rank());
        assert_eq!(ConceptKind::Unknown.rank(), ConceptKind::Concept.rank());
    }

    #[test]
    fn record_deserializes_wire_shape() {
        let json = r#"{
            "id": "c1",
            "label": "JSX",
            "type": "concept",
            "parent": "main1",
            "explanation": "syntax extension"
        }"#;
        let rec: ConceptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id.as_deref(), Some("c1"));
        assert_eq!(rec.label, "JSX");
        assert_eq!(rec.kind, ConceptKind::Concept);
        assert_eq!(rec.parent.as_deref(), Some("main1"));
        assert_eq!(rec.explanation.as_deref(), Some("syntax extension"));
    }

    #[test]
    fn record_optional_fields_default() {
        let json = r#"{ "label": "React", "type": "main" }"#;
        let rec: ConceptRecord = serde_json::from_str(json).unwrap();
        assert!(rec.id.is_none());
        assert!(rec.parent.is_none());
        assert!(rec.explanation.is_none());
    }

    #[test]
    fn blank_label_detected() {
        let rec = ConceptRecord {
            id: None,
            label: "   ".into(),
            kind: ConceptKind::Concept,
            parent: None,
            explanation: None,
        };
        assert!(rec.has_blank_label());
    }
}
