//! Search Middleware
//!
//! Owns the search term's side effects:
//! - restores the term from the preference store on bootstrap
//! - writes every term change back to the store
//! - decides when a term change becomes a new effective query
//!
//! In instant mode every edit changes the query. In submit mode only
//! `TextInputAction::Confirm` does, so typing never triggers a request.

use crate::actions::{Action, BootstrapAction, Event, SearchAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_client::SearchQuery;
use hn_stories_config::{AppConfig, PreferenceStore, SearchMode, SEARCH_KEY};

/// Middleware for the search term and query
///
/// Keeps its own copy of term and query: edits arrive faster than the
/// main thread publishes reduced state, so the snapshot may lag behind.
pub struct SearchMiddleware {
    preferences: Box<dyn PreferenceStore>,
    endpoint: String,
    default_term: String,
    mode: SearchMode,
    term: String,
    query: Option<SearchQuery>,
}

impl SearchMiddleware {
    pub fn new(preferences: Box<dyn PreferenceStore>, config: &AppConfig) -> Self {
        Self {
            preferences,
            endpoint: config.endpoint.clone(),
            default_term: config.default_search_term.clone(),
            mode: config.search_mode,
            term: String::new(),
            query: None,
        }
    }

    /// Stored term, unless absent or empty
    fn initial_term(&self) -> String {
        self.preferences
            .get(SEARCH_KEY)
            .filter(|term| !term.is_empty())
            .unwrap_or_else(|| self.default_term.clone())
    }

    fn set_term(&mut self, term: String, dispatcher: &Dispatcher) {
        if let Err(e) = self.preferences.set(SEARCH_KEY, &term) {
            log::warn!("Failed to persist search term: {:#}", e);
        }
        self.term = term.clone();
        dispatcher.dispatch(Action::Search(SearchAction::SetTerm(term)));
    }

    /// Make the current term the effective query, if it is not already
    fn update_query(&mut self, dispatcher: &Dispatcher) {
        let query = SearchQuery::new(self.endpoint.clone(), self.term.clone());
        if self.query.as_ref() == Some(&query) {
            log::debug!("Query unchanged: {}", query);
            return;
        }

        log::info!("Query changed to {}", query);
        self.query = Some(query.clone());
        dispatcher.dispatch(Action::Search(SearchAction::SetQuery(query.clone())));
        dispatcher.dispatch(Action::event(Event::QueryChanged(query)));
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                let term = self.initial_term();
                log::info!("Restored search term '{}'", term);
                self.set_term(term, dispatcher);
                // first query on mount, regardless of mode
                self.update_query(dispatcher);
                true
            }

            Action::TextInput(TextInputAction::Confirm) => {
                self.update_query(dispatcher);
                false
            }

            Action::TextInput(edit) => {
                if let Some(term) = edit.apply(&self.term) {
                    if term != self.term {
                        self.set_term(term, dispatcher);
                        if self.mode == SearchMode::Instant {
                            self.update_query(dispatcher);
                        }
                    }
                }
                false
            }

            _ => true,
        }
    }
}
