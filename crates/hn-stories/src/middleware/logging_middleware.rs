use crate::actions::{Action, Event, FetchOutcome, GlobalAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Key presses are logged once translated
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            // Summarize payloads; a page of stories is too much for one log line
            Action::Stories(StoriesAction::FetchSuccess(stories)) => {
                log::debug!("Action: Stories(FetchSuccess({} stories))", stories.len())
            }
            Action::Event(Event::FetchCompleted {
                seq,
                outcome: FetchOutcome::Loaded(stories),
            }) => {
                log::debug!("Action: Event(FetchCompleted #{seq}, {} stories)", stories.len())
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
