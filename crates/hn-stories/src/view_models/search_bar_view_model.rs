//! View model for the search bar

use crate::state::AppState;
use hn_stories_config::SearchMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarViewModel {
    pub term: String,
    /// Block title hint
    pub hint: &'static str,
    /// The request the list belongs to
    pub query_text: String,
    /// The input differs from the last submitted query
    pub pending: bool,
}

impl SearchBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let hint = match state.config.search_mode {
            SearchMode::Submit => " Search: (Enter to submit) ",
            SearchMode::Instant => " Search: ",
        };

        let (query_text, pending) = match &state.search.query {
            Some(query) => (format!("GET {}", query.url()), query.term != state.search.term),
            None => ("no search yet".to_string(), !state.search.term.is_empty()),
        };

        Self {
            term: state.search.term.clone(),
            hint,
            query_text,
            pending,
        }
    }
}
