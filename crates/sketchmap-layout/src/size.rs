//! Estimated on-screen node extents.
//!
//! The layout only needs coarse footprints to keep sibling subtrees from
//! overlapping; it does not chase pixel fidelity. Width scales with label
//! length at a per-tier character width, plus the tier's padding. Tiers
//! render at decreasing prominence (`main` > `concept` > `detail`), so
//! each tier gets its own constants.

use sketchmap_core::NodeTier;

/// Estimated rendered width/height of a node, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeExtent {
    pub width: f64,
    pub height: f64,
}

/// Per-tier sizing constants: (per-char width, padding, height, min width).
fn tier_metrics(tier: NodeTier) -> (f64, f64, f64, f64) {
    match tier {
        NodeTier::Root | NodeTier::Main => (10.0, 48.0, 46.0, 120.0),
        NodeTier::Concept => (8.0, 36.0, 38.0, 96.0),
        NodeTier::Detail => (7.0, 28.0, 30.0, 72.0),
    }
}

/// Estimates the rendered extent of a node from its label and tier.
pub fn estimate_extent(label: &str, tier: NodeTier) -> NodeExtent {
    let (per_char, padding, height, min_width) = tier_metrics(tier);
    let chars = label.chars().count() as f64;
    NodeExtent {
        width: (chars * per_char + padding).max(min_width),
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_labels_are_wider() {
        let short = estimate_extent("JSX", NodeTier::Concept);
        let long = estimate_extent("Component Lifecycle", NodeTier::Concept);
        assert!(long.width > short.width);
    }

    #[test]
    fn higher_tiers_are_larger() {
        let main = estimate_extent("State", NodeTier::Main);
        let concept = estimate_extent("State", NodeTier::Concept);
        let detail = estimate_extent("State", NodeTier::Detail);
        assert!(main.width > concept.width);
        assert!(concept.width > detail.width);
        assert!(main.height > concept.height);
        assert!(concept.height > detail.height);
    }

    #[test]
    fn short_labels_hit_the_floor() {
        let extent = estimate_extent("A", NodeTier::Main);
        assert_eq!(extent.width, 120.0);
    }
}
