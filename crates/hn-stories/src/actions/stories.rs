//! Story state actions
//!
//! The closed set of transitions on the fetched story list.

use hn_client::Story;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request was issued
    FetchInit,
    /// A request returned these stories, in server order
    FetchSuccess(Vec<Story>),
    /// A request failed (network, status or parse error)
    FetchFailure,
    /// Dismiss every story sharing this story's `objectID`
    RemoveStory(Story),
}
