//! Application state: one live `GraphBuilder` per recording session.
//!
//! Sessions live in a `DashMap` keyed by uuid; each builder sits behind
//! its own `tokio::sync::Mutex` (async-aware, so handlers await the lock
//! without blocking the runtime). The per-session mutex is what enforces
//! the core's sequencing contract: batches applied to one session are
//! strictly ordered, while separate sessions proceed independently.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use sketchmap_builder::GraphBuilder;

/// A session's builder behind its ordering lock.
pub type SessionHandle = Arc<tokio::sync::Mutex<GraphBuilder>>;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    sessions: Arc<DashMap<Uuid, SessionHandle>>,
}

impl AppState {
    /// Creates an empty state with no sessions.
    pub fn new() -> Self {
        AppState {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Creates a new recording session and returns its id.
    ///
    /// `threshold` overrides the default merge threshold when given.
    pub fn create_session(&self, threshold: Option<f64>) -> Uuid {
        let builder = match threshold {
            Some(t) => GraphBuilder::with_threshold(t),
            None => GraphBuilder::new(),
        };
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(tokio::sync::Mutex::new(builder)));
        id
    }

    /// Looks up a session's builder handle.
    pub fn session(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.get(&id).map(|entry| entry.value().clone())
    }

    /// Discards a session entirely. Returns `false` if it did not exist.
    pub fn remove_session(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Returns the number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
