//! Search actions

use hn_client::SearchQuery;

/// Updates to the search term and the effective query
///
/// These are produced by the search middleware, which owns persistence and
/// decides when a term change becomes a new query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// The search term now reads this
    SetTerm(String),
    /// The effective request changed
    SetQuery(SearchQuery),
}
