//! Simulated search backend
//!
//! Serves a fixed story list after a delay, in the `{ data: { stories } }`
//! shape. The query is ignored; callers filter locally.

use crate::client::{FetchError, SearchClient};
use crate::types::{LocalResponse, SearchQuery, Story};
use async_trait::async_trait;
use std::time::Duration;

const INITIAL_STORIES: &str = r#"{
  "data": {
    "stories": [
      {
        "objectID": "0",
        "title": "React",
        "url": "https://reactjs.org/",
        "author": "Jordan Walke",
        "num_comments": 3,
        "points": 4
      },
      {
        "objectID": "1",
        "title": "Redux",
        "url": "https://redux.js.org/",
        "author": "Dan Abramov, Andrew Clark",
        "num_comments": 2,
        "points": 5
      }
    ]
  }
}"#;

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Client that answers from memory after a delay
#[derive(Debug, Clone)]
pub struct LocalStoriesClient {
    payload: String,
    delay: Duration,
    fail: bool,
}

impl LocalStoriesClient {
    /// Serve the built-in stories after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            payload: INITIAL_STORIES.to_string(),
            delay,
            fail: false,
        }
    }

    /// Serve a custom payload (must use the local response shape)
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Make every request fail after the delay
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for LocalStoriesClient {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SearchClient for LocalStoriesClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Story>, FetchError> {
        log::debug!("Simulating fetch for '{}' ({:?})", query.term, self.delay);
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(FetchError::Status {
                status: 500,
                url: query.url(),
            });
        }

        let response: LocalResponse = serde_json::from_str(&self.payload)?;
        Ok(response.data.stories)
    }
}
