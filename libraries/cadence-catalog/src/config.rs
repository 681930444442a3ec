//! Catalog client configuration.

use serde::{Deserialize, Serialize};

/// Default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://saavn.dev/api";

/// Configuration for connecting to the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the service (e.g. "https://saavn.dev/api")
    pub base_url: String,
    /// Playlist limit for free-text searches
    pub playlist_search_limit: usize,
    /// Song limit when fetching a playlist by id
    pub playlist_fetch_limit: usize,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a config for the given base URL with default limits.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            playlist_search_limit: 10,
            playlist_fetch_limit: 100,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
