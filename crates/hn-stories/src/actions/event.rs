//! Events - facts observed by middleware
//!
//! Events re-enter the middleware chain but are never forwarded to reducers.

use hn_client::{SearchQuery, Story};

/// Result of one fetch, cloneable so it can travel through the action channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Story>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The effective query changed (or was set for the first time)
    QueryChanged(SearchQuery),
    /// A fetch finished; `seq` identifies the request that produced it
    FetchCompleted { seq: u64, outcome: FetchOutcome },
}
