use crate::actions::Action;
use crate::reducer::reduce;
use crate::state::AppState;

/// Listener notified after every state transition
pub type Subscriber = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and applies reducers
///
/// The store is the only owner of `AppState`. Side effects live in the
/// middleware chain on the background worker; by the time an action gets
/// here it only needs reducing.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            subscribers: Vec::new(),
        }
    }

    /// Register a listener, called after each dispatched action
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action to the state and notify subscribers
    ///
    /// Actions are applied one at a time, in call order, to the latest state.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
