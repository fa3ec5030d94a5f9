//! Incremental radial placement for live streaming.
//!
//! When concepts arrive one at a time, re-running the full tree layout
//! would reset positions the user has already dragged. Instead each new
//! node is placed in O(1) from two inputs: its parent's position and its
//! sibling index (the parent's current child count).
//!
//! - `main` nodes fan out from the root at fixed 60-degree steps.
//! - `concept` nodes fan out inside a 45-degree window centered on the
//!   root-to-parent ray, at a smaller radius.
//! - `detail` nodes use a 30-degree window and a shorter radius still.
//!
//! The result is deterministic and collision-avoiding, not collision-free:
//! positional precision is traded for real-time responsiveness.

use std::f64::consts::PI;

use sketchmap_core::{NodeTier, Position};

/// Radius of the `main` ring around the root.
pub const MAIN_RADIUS: f64 = 260.0;
/// Radius of `concept` children around their parent.
pub const CONCEPT_RADIUS: f64 = 170.0;
/// Radius of `detail` children around their parent.
pub const DETAIL_RADIUS: f64 = 110.0;

/// Angular step between consecutive `main` nodes (60 degrees).
pub const MAIN_STEP: f64 = PI / 3.0;
/// Fan-out window for `concept` children (45 degrees).
pub const CONCEPT_WINDOW: f64 = PI / 4.0;
/// Fan-out window for `detail` children (30 degrees).
pub const DETAIL_WINDOW: f64 = PI / 6.0;

/// Computes the initial position for a new node.
///
/// `sibling_index` is the parent's child count before this placement, so
/// consecutive siblings land on different angular slots.
pub fn place_child(parent: Position, sibling_index: u32, tier: NodeTier) -> Position {
    match tier {
        NodeTier::Root => Position::ORIGIN,
        NodeTier::Main => polar(parent, sibling_index as f64 * MAIN_STEP, MAIN_RADIUS),
        NodeTier::Concept => fan(parent, sibling_index, CONCEPT_WINDOW, CONCEPT_RADIUS),
        NodeTier::Detail => fan(parent, sibling_index, DETAIL_WINDOW, DETAIL_RADIUS),
    }
}

/// Places a child inside an angular window around the root-to-parent ray.
///
/// A parent at the origin has no ray (the node's declared parent degraded
/// to the root), so the placement falls back to main-style stepping at
/// this tier's radius.
fn fan(parent: Position, index: u32, window: f64, radius: f64) -> Position {
    if parent.is_origin() {
        return polar(parent, index as f64 * MAIN_STEP, radius);
    }
    let ray = parent.y.atan2(parent.x);
    polar(parent, ray + fan_offset(index, window), radius)
}

/// Angular slot for the `index`-th child inside `window`.
///
/// The first child sits on the parent ray; later children alternate sides
/// at widening offsets (0, +w/4, -w/4, +w/2, -w/2, ...). Slots past the
/// window edge keep widening for crowded parents.
fn fan_offset(index: u32, window: f64) -> f64 {
    let step = window / 4.0;
    let magnitude = f64::from((index + 1) / 2) * step;
    if index % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

fn polar(base: Position, angle: f64, radius: f64) -> Position {
    Position::new(base.x + angle.cos() * radius, base.y + angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: Position, b: Position) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn main_nodes_ring_the_root() {
        for index in 0..6 {
            let pos = place_child(Position::ORIGIN, index, NodeTier::Main);
            assert!((dist(pos, Position::ORIGIN) - MAIN_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn main_siblings_step_sixty_degrees() {
        let first = place_child(Position::ORIGIN, 0, NodeTier::Main);
        let second = place_child(Position::ORIGIN, 1, NodeTier::Main);

        let a0 = first.y.atan2(first.x);
        let a1 = second.y.atan2(second.x);
        assert!((a1 - a0 - MAIN_STEP).abs() < 1e-9);
    }

    #[test]
    fn first_concept_child_sits_on_the_parent_ray() {
        let parent = place_child(Position::ORIGIN, 0, NodeTier::Main);
        let child = place_child(parent, 0, NodeTier::Concept);

        // Parent at angle 0: the child extends straight along +x.
        assert!((child.x - (parent.x + CONCEPT_RADIUS)).abs() < 1e-9);
        assert!(child.y.abs() < 1e-9);
    }

    #[test]
    fn siblings_occupy_distinct_slots() {
        let parent = Position::new(260.0, 0.0);
        let mut positions = Vec::new();
        for index in 0..5 {
            positions.push(place_child(parent, index, NodeTier::Concept));
        }
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert!(
                    dist(positions[i], positions[j]) > 1.0,
                    "siblings {} and {} collide",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn radii_shrink_down_the_hierarchy() {
        let parent = Position::new(-100.0, 150.0);
        let concept = place_child(parent, 0, NodeTier::Concept);
        let detail = place_child(parent, 0, NodeTier::Detail);

        assert!((dist(concept, parent) - CONCEPT_RADIUS).abs() < 1e-9);
        assert!((dist(detail, parent) - DETAIL_RADIUS).abs() < 1e-9);
        assert!(DETAIL_RADIUS < CONCEPT_RADIUS && CONCEPT_RADIUS < MAIN_RADIUS);
    }

    #[test]
    fn orphaned_tier_falls_back_to_stepping() {
        // Concept whose parent degraded to the root: no ray to fan around.
        let a = place_child(Position::ORIGIN, 0, NodeTier::Concept);
        let b = place_child(Position::ORIGIN, 1, NodeTier::Concept);
        assert!((dist(a, Position::ORIGIN) - CONCEPT_RADIUS).abs() < 1e-9);
        assert!(dist(a, b) > 1.0);
    }

    #[test]
    fn placement_is_deterministic() {
        let parent = Position::new(42.0, -17.0);
        let once = place_child(parent, 3, NodeTier::Detail);
        let twice = place_child(parent, 3, NodeTier::Detail);
        assert_eq!(once, twice);
    }

    #[test]
    fn fan_offsets_alternate_sides() {
        let w = CONCEPT_WINDOW;
        assert_eq!(fan_offset(0, w), 0.0);
        assert!(fan_offset(1, w) > 0.0);
        assert!(fan_offset(2, w) < 0.0);
        assert!(fan_offset(3, w) > fan_offset(1, w));
    }
}
