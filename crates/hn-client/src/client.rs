//! Search client trait and error type
//!
//! This module defines the core `SearchClient` trait that all client
//! implementations must satisfy, and the `FetchError` they report.

use crate::types::{SearchQuery, Story};
use async_trait::async_trait;
use thiserror::Error;

/// Everything that can go wrong while fetching stories
///
/// Callers treat every variant the same way (the fetch failed); the
/// variants exist so the log says why.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Search client trait
///
/// Implementations issue exactly one request per call. There is no retry,
/// no timeout beyond the transport's own, and no cancellation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// tasks spawned for each request.
///
/// # Example
///
/// ```rust,ignore
/// use hn_client::{SearchClient, SearchQuery, Story};
///
/// async fn titles(client: &dyn SearchClient, query: &SearchQuery) -> Vec<String> {
///     match client.search(query).await {
///         Ok(stories) => stories.into_iter().map(|s| s.title).collect(),
///         Err(_) => Vec::new(),
///     }
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetch the stories matching `query`, in server order
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Story>, FetchError>;
}
