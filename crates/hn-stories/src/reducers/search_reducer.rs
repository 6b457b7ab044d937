//! Search Reducer

use crate::actions::SearchAction;
use crate::state::SearchState;

pub fn reduce(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::SetTerm(term) => {
            state.term = term.clone();
        }
        SearchAction::SetQuery(query) => {
            log::debug!("Effective query is now {}", query);
            state.query = Some(query.clone());
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_client::SearchQuery;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_term_leaves_query_alone() {
        let query = SearchQuery::new("http://hn", "react");
        let state = SearchState {
            term: "react".into(),
            query: Some(query.clone()),
        };

        let state = reduce(state, &SearchAction::SetTerm("redux".into()));
        assert_eq!(state.term, "redux");
        assert_eq!(state.query, Some(query));
    }

    #[test]
    fn test_set_query() {
        let query = SearchQuery::new("http://hn", "rust");
        let state = reduce(SearchState::default(), &SearchAction::SetQuery(query.clone()));
        assert_eq!(state.query, Some(query));
        assert_eq!(state.term, "");
    }
}
