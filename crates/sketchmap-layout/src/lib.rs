//! Layout passes for the concept graph.
//!
//! Two placement strategies cover the two ways concepts arrive:
//! - [`tree::layout`]: a pure two-pass layout over one complete concept
//!   set, used when the whole set is known up front (demo rendering).
//!   Sibling subtrees get non-overlapping horizontal footprints and depth
//!   maps to a fixed vertical increment.
//! - [`radial::place_child`]: O(1) incremental placement used during live
//!   streaming, where a full re-layout would reset user-dragged positions.
//!
//! Both are pure -- they read concept data but never mutate graph state.

pub mod radial;
pub mod size;
pub mod tree;

pub use radial::place_child;
pub use size::{estimate_extent, NodeExtent};
pub use tree::{layout, LayoutEdge, LayoutResult, PositionedNode};
