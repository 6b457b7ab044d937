use hn_client::SearchQuery;

/// Search input state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// What the input currently reads
    pub term: String,
    /// The request that was last issued; only changes on submission in submit mode
    pub query: Option<SearchQuery>,
}
