//! Bootstrap actions

/// Startup sequence actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Application mounted - restore the search term and issue the first query
    Start,
}
