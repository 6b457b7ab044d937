//! Application configuration
//!
//! Configuration loaded from .hn-stories.toml.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When a search term change turns into a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Every keystroke changes the query
    Instant,
    /// The query only changes when the search is submitted
    #[default]
    Submit,
}

/// Where stories come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// The public search API
    #[default]
    Remote,
    /// Built-in stories served after a delay, filtered locally by title
    Local,
}

/// Application configuration loaded from .hn-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Search endpoint; the term is sent as the `query` parameter
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Term used when no search term has been stored yet
    #[serde(default = "default_search_term")]
    pub default_search_term: String,

    #[serde(default)]
    pub search_mode: SearchMode,

    #[serde(default)]
    pub fetch_mode: FetchMode,

    /// Simulated latency of the local backend
    #[serde(default = "default_local_delay_ms")]
    pub local_delay_ms: u64,
}

fn default_endpoint() -> String {
    "https://hn.algolia.com/api/v1/search".to_string()
}

fn default_search_term() -> String {
    "React".to_string()
}

fn default_local_delay_ms() -> u64 {
    2000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_search_term: default_search_term(),
            search_mode: SearchMode::default(),
            fetch_mode: FetchMode::default(),
            local_delay_ms: default_local_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn local_delay(&self) -> Duration {
        Duration::from_millis(self.local_delay_ms)
    }
}
