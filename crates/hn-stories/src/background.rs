//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, user input and reducers
//! - Background thread runs the middleware chain (network, file I/O)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes after each reduce)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(RecvError) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if let Some(forward) = run_chain(&mut middleware, action, &current_state, &dispatcher) {
            if result_tx.send(forward).is_err() {
                log::error!("Result channel disconnected, shutting down");
                break;
            }
        }
    }

    log::info!("Background worker stopped");
}

/// Run one action through the chain
///
/// Returns the action if it should reach the reducers. Events never do;
/// they exist only for middleware to observe.
pub fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> Option<Action> {
    for mw in middleware.iter_mut() {
        if !mw.handle(&action, state, dispatcher) {
            return None;
        }
    }

    if matches!(action, Action::Event(_)) {
        None
    } else {
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Event, StoriesAction};
    use hn_client::SearchQuery;
    use std::sync::mpsc;

    struct Consume;

    impl Middleware for Consume {
        fn handle(&mut self, action: &Action, _state: &AppState, _d: &Dispatcher) -> bool {
            !matches!(action, Action::Stories(StoriesAction::FetchFailure))
        }
    }

    #[test]
    fn test_run_chain_forwards_and_consumes() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();
        let mut chain: Vec<Box<dyn Middleware>> = vec![Box::new(Consume)];

        let forwarded = run_chain(
            &mut chain,
            Action::Stories(StoriesAction::FetchInit),
            &state,
            &dispatcher,
        );
        assert!(matches!(
            forwarded,
            Some(Action::Stories(StoriesAction::FetchInit))
        ));

        let consumed = run_chain(
            &mut chain,
            Action::Stories(StoriesAction::FetchFailure),
            &state,
            &dispatcher,
        );
        assert!(consumed.is_none());
    }

    #[test]
    fn test_events_never_reach_reducers() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut chain: Vec<Box<dyn Middleware>> = vec![Box::new(Consume)];

        let forwarded = run_chain(
            &mut chain,
            Action::event(Event::QueryChanged(SearchQuery::new("http://hn", "x"))),
            &AppState::default(),
            &dispatcher,
        );
        assert!(forwarded.is_none());
    }

    #[test]
    fn test_worker_forwards_quit_and_stops() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            Vec::new(),
        );

        action_tx.send(Action::Stories(StoriesAction::FetchInit)).unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        handle.join().unwrap();

        let received: Vec<Action> = result_rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(matches!(received[0], Action::Stories(StoriesAction::FetchInit)));
        assert!(matches!(received[1], Action::Global(GlobalAction::Quit)));
    }
}
