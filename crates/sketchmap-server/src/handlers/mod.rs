//! HTTP handlers. All handlers are thin wrappers that delegate to the
//! session's `GraphBuilder` or the pure layout function.

pub mod graph;
pub mod layout;
pub mod sessions;
