//! Hacker News types
//!
//! Wire and domain types shared by all client implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single search result
///
/// Field names follow the search API (`objectID`, `num_comments`).
/// Stories are immutable once fetched; `object_id` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID", default, deserialize_with = "null_as_default")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Create a story with the given id and title, all other fields empty
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: title.into(),
            url: String::new(),
            author: String::new(),
            num_comments: 0,
            points: 0,
            created_at: None,
        }
    }

    /// Set the story url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the story author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set comment count and points
    pub fn with_stats(mut self, num_comments: u64, points: i64) -> Self {
        self.num_comments = num_comments;
        self.points = points;
        self
    }
}

/// The API sends `null` for missing titles, urls and counters
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response shape of the remote search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

/// Response shape of the simulated local backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalResponse {
    pub data: LocalData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalData {
    pub stories: Vec<Story>,
}

/// The effective search request
///
/// Two queries describe the same request iff endpoint and term match,
/// which is what decides whether a new fetch is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub endpoint: String,
    pub term: String,
}

impl SearchQuery {
    pub fn new(endpoint: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            term: term.into(),
        }
    }

    /// The request URL as shown to the user (`<endpoint>?query=<term>`)
    ///
    /// The wire request encodes the term; this is the unencoded form.
    pub fn url(&self) -> String {
        format!("{}?query={}", self.endpoint, self.term)
    }

    /// Whether there is nothing to search for
    ///
    /// Only the empty term counts; whitespace is a term like any other.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_story_deserializes_api_field_names() {
        let json = r#"{
            "objectID": "42",
            "title": "Rust 2024",
            "url": "https://blog.rust-lang.org",
            "author": "steveklabnik",
            "num_comments": 12,
            "points": 300,
            "created_at": "2024-01-01T10:00:00.000Z"
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, "42");
        assert_eq!(story.title, "Rust 2024");
        assert_eq!(story.num_comments, 12);
        assert_eq!(story.points, 300);
        assert!(story.created_at.is_some());
    }

    #[test]
    fn test_story_null_fields_read_as_empty() {
        let json = r#"{
            "objectID": "7",
            "title": null,
            "url": null,
            "author": "pg",
            "num_comments": null,
            "points": null
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story, Story::new("7", "").with_author("pg"));
    }

    #[test]
    fn test_story_missing_fields_read_as_empty() {
        let story: Story = serde_json::from_str(r#"{"objectID": "1"}"#).unwrap();
        assert_eq!(story, Story::new("1", ""));
    }

    #[test]
    fn test_story_without_object_id_is_rejected() {
        let result: Result<Story, _> = serde_json::from_str(r#"{"title": "no id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_local_response_shape() {
        let json = r#"{"data": {"stories": [{"objectID": "0", "title": "React"}]}}"#;
        let response: LocalResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.stories, vec![Story::new("0", "React")]);
    }

    #[test]
    fn test_query_url() {
        let query = SearchQuery::new("https://hn.algolia.com/api/v1/search", "react");
        assert_eq!(
            query.url(),
            "https://hn.algolia.com/api/v1/search?query=react"
        );
        assert_eq!(query.to_string(), query.url());
    }

    #[test]
    fn test_query_identity() {
        let a = SearchQuery::new("http://a", "rust");
        assert_eq!(a, SearchQuery::new("http://a", "rust"));
        assert_ne!(a, SearchQuery::new("http://a", "go"));
        assert_ne!(a, SearchQuery::new("http://b", "rust"));
    }

    #[test]
    fn test_hit_without_object_id_still_decodes() {
        let json = r#"{"hits": [
            {"title": "No id", "points": 1},
            {"objectID": null, "title": "Null id"},
            {"objectID": "7", "title": "With id"}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();

        let ids: Vec<&str> = response.hits.iter().map(|s| s.object_id.as_str()).collect();
        assert_eq!(ids, vec!["", "", "7"]);
        assert_eq!(response.hits[0].title, "No id");
    }

    #[test]
    fn test_query_is_empty() {
        assert!(SearchQuery::new("http://a", "").is_empty());
        assert!(!SearchQuery::new("http://a", "   ").is_empty());
        assert!(!SearchQuery::new("http://a", "x").is_empty());
    }
}
