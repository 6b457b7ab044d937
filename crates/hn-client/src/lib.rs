//! Hacker News search client
//!
//! This crate provides a trait-based client for the Algolia Hacker News
//! search API, plus a simulated backend that serves a fixed set of stories
//! after a delay.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - search(&SearchQuery) -> Vec<Story>            │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ AlgoliaClient   │         │ LocalStoriesClient  │
//! │ (HTTP, `hits`)  │         │ (simulated, delay)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_client::{AlgoliaClient, SearchClient, SearchQuery, DEFAULT_ENDPOINT};
//!
//! # async fn example() -> Result<(), hn_client::FetchError> {
//! let client = AlgoliaClient::new()?;
//! let query = SearchQuery::new(DEFAULT_ENDPOINT, "rust");
//! let stories = client.search(&query).await?;
//! println!("{} stories", stories.len());
//! # Ok(())
//! # }
//! ```

pub mod algolia_client;
pub mod client;
pub mod local_client;
pub mod types;

/// Default search endpoint (public Algolia HN API)
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

pub use algolia_client::AlgoliaClient;
pub use client::{FetchError, SearchClient};
pub use local_client::LocalStoriesClient;
pub use types::{LocalResponse, SearchQuery, SearchResponse, Story};
