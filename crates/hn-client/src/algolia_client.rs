//! Algolia-backed search client
//!
//! Direct implementation of the `SearchClient` trait against the public
//! Hacker News search API. Expects `{ "hits": [Story...] }`.

use crate::client::{FetchError, SearchClient};
use crate::types::{SearchQuery, SearchResponse, Story};
use async_trait::async_trait;
use log::debug;

const USER_AGENT: &str = concat!("hn-stories/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the search API
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http: reqwest::Client,
}

impl AlgoliaClient {
    /// Create a client with its own connection pool
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Story>, FetchError> {
        debug!("Fetching stories from {}", query);

        let response = self
            .http
            .get(&query.endpoint)
            .query(&[("query", query.term.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: query.url(),
            });
        }

        // Decode separately so malformed bodies surface as Decode errors
        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        debug!("Fetched {} stories for '{}'", parsed.hits.len(), query.term);
        Ok(parsed.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(server: &MockServer) -> String {
        format!("{}/api/v1/search", server.uri())
    }

    #[tokio::test]
    async fn test_search_returns_hits_in_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .and(query_param("query", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hits": [
                    { "objectID": "2", "title": "Second", "author": "b", "num_comments": 1, "points": 5 },
                    { "objectID": "1", "title": "First", "author": "a", "num_comments": 0, "points": 3 }
                ],
                "nbHits": 2
            })))
            .mount(&server)
            .await;

        let client = AlgoliaClient::new().unwrap();
        let stories = client
            .search(&SearchQuery::new(endpoint(&server), "rust"))
            .await
            .unwrap();

        let ids: Vec<&str> = stories.iter().map(|s| s.object_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(stories[0].title, "Second");
    }

    #[tokio::test]
    async fn test_search_encodes_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .and(query_param("query", "c++ & rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AlgoliaClient::new().unwrap();
        let stories = client
            .search(&SearchQuery::new(endpoint(&server), "c++ & rust"))
            .await
            .unwrap();
        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_search_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = AlgoliaClient::new().unwrap();
        let err = client
            .search(&SearchQuery::new(endpoint(&server), "rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_search_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let client = AlgoliaClient::new().unwrap();
        let err = client
            .search(&SearchQuery::new(endpoint(&server), "rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_missing_hits_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
            )
            .mount(&server)
            .await;

        let client = AlgoliaClient::new().unwrap();
        let err = client
            .search(&SearchQuery::new(endpoint(&server), "rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_host_is_http_error() {
        let client = AlgoliaClient::new().unwrap();
        let err = client
            .search(&SearchQuery::new("http://127.0.0.1:1/search", "rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Http(_)));
    }
}
