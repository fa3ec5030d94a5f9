pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod record;
pub mod similarity;

// Re-export commonly used types
pub use error::CoreError;
pub use graph::ConceptGraph;
pub use id::{ConceptId, EdgeId};
pub use node::{ConceptNode, NodeTier, ParentLink, Position};
pub use record::{ConceptKind, ConceptRecord};
pub use similarity::{find_best_match, similarity, DEFAULT_THRESHOLD};
