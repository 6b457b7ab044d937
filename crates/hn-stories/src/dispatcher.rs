//! Re-entry point for middleware
//!
//! Anything a middleware dispatches goes back to the start of the chain on
//! the worker thread, never straight to the reducers. The startup sequence
//! relies on that:
//!
//! ```text
//! Bootstrap::Start ─▶ SearchMiddleware ─▶ Event::QueryChanged
//!                                              │
//!            HackerNewsMiddleware ◀────────────┘
//!                 │ FetchInit, then (async) Event::FetchCompleted
//!                 ▼
//!            HackerNewsMiddleware ─▶ FetchSuccess / FetchFailure ─▶ reducers
//! ```

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Cloneable handle onto the worker's action queue
///
/// Clones travel into fetch tasks on the tokio runtime, so completions
/// queue up behind whatever the user did in the meantime.
#[derive(Clone)]
pub struct Dispatcher {
    queue: Sender<Action>,
}

impl Dispatcher {
    pub fn new(queue: Sender<Action>) -> Self {
        Self { queue }
    }

    /// Queue an action for the chain
    ///
    /// Once the worker has shut down there is nobody left to act on it,
    /// so the action is dropped with a warning.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.queue.send(action) {
            log::warn!("Worker gone, dropping {:?}", e.0);
        }
    }
}
