//! HTTP client for the catalog service.

use crate::config::CatalogConfig;
use crate::curated::{merge_unique, plan_for, SongQuery};
use crate::error::{CatalogError, Result};
use crate::parse::{self, Envelope};
use async_trait::async_trait;
use cadence_core::{
    Catalog, CuratedCollection, PlaylistDetails, PlaylistSummary, SearchResults, TrackList,
    TrackRef,
};
use futures_util::future::{join, try_join_all};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the remote music catalog.
///
/// The lower-level methods (`search_songs`, `fetch_playlist`, ...) report
/// failures as [`CatalogError`]. The [`Catalog`] implementation built on top
/// of them never fails: errors are logged and turned into empty results with
/// `success = false`.
///
/// # Example
///
/// ```ignore
/// use cadence_catalog::{CatalogClient, CatalogConfig};
/// use cadence_core::Catalog;
///
/// let client = CatalogClient::new(CatalogConfig::default())?;
/// let results = client.search("arijit singh", 20).await;
/// for track in &results.tracks {
///     println!("{} - {}", track.name, track.artist_line());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("Cadence/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %base_url, "Catalog client ready");

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Active configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Search songs; only playable tracks are returned.
    pub async fn search_songs(&self, query: &str, limit: usize) -> Result<Vec<TrackRef>> {
        let data = self
            .get_data("/search/songs", &search_params(query, limit))
            .await?;

        Ok(data
            .as_ref()
            .map(parse::tracks_from_results)
            .unwrap_or_default())
    }

    /// Search playlists.
    pub async fn search_playlists(&self, query: &str, limit: usize) -> Result<Vec<PlaylistSummary>> {
        let data = self
            .get_data("/search/playlists", &search_params(query, limit))
            .await?;

        Ok(data
            .as_ref()
            .map(parse::playlists_from_results)
            .unwrap_or_default())
    }

    /// Fetch a playlist with its playable songs.
    ///
    /// Returns `Ok(None)` for an empty id (no request is made) or when the
    /// service has no data for it.
    pub async fn fetch_playlist(&self, id: &str) -> Result<Option<PlaylistDetails>> {
        let id = id.trim();
        if id.is_empty() {
            warn!("Refusing to fetch playlist with empty id");
            return Ok(None);
        }

        let params = [
            ("id", id.to_string()),
            ("limit", self.config.playlist_fetch_limit.to_string()),
        ];
        let details = self
            .get_data("/playlists", &params)
            .await?
            .as_ref()
            .and_then(parse::playlist_details);

        if let Some(details) = &details {
            info!(
                playlist_id = %details.id,
                songs = details.songs.len(),
                "Loaded playlist"
            );
        }

        Ok(details)
    }

    /// Fetch a single song by id.
    pub async fn fetch_song(&self, id: &str) -> Result<Option<TrackRef>> {
        let id = id.trim();
        if id.is_empty() {
            warn!("Refusing to fetch song with empty id");
            return Ok(None);
        }

        let data = self.get_data("/songs", &[("id", id.to_string())]).await?;
        Ok(data.as_ref().and_then(parse::single_track))
    }

    /// Assemble a curated collection from its fetch plan.
    ///
    /// Any transport or status failure fails the whole collection.
    pub async fn fetch_curated(&self, collection: CuratedCollection) -> Result<Vec<TrackRef>> {
        let plan = plan_for(collection);

        let pages = try_join_all(plan.primaries.iter().map(|q| self.run_query(q))).await?;
        let mut merged = Vec::new();
        for page in pages {
            merge_unique(&mut merged, page);
        }

        if let Some((fallback, rule)) = plan.fallback {
            if rule.applies(merged.len()) {
                debug!(
                    collection = %collection,
                    found = merged.len(),
                    query = fallback.query,
                    "Running fallback query"
                );
                let page = self.run_query(&fallback).await?;
                merge_unique(&mut merged, page);
            }
        }

        plan.apply_cap(&mut merged);

        debug!(collection = %collection, tracks = merged.len(), "Curated collection assembled");
        Ok(merged)
    }

    async fn run_query(&self, query: &SongQuery) -> Result<Vec<TrackRef>> {
        self.search_songs(query.query, query.limit).await
    }

    /// GET `path` and unwrap the `{success, data}` envelope.
    ///
    /// `Ok(None)` means the service answered but had no data.
    async fn get_data(&self, path: &str, params: &[(&str, String)]) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, params = ?params, "Catalog request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CatalogError::Unreachable(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("{}: {}", path, e)))?;

        let data = envelope.into_data();
        if data.is_none() {
            debug!(url = %url, "Catalog returned no data");
        }

        Ok(data)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search(&self, query: &str, limit: usize) -> SearchResults {
        let playlist_limit = self.config.playlist_search_limit;
        let (songs, playlists) = join(
            self.search_songs(query, limit),
            self.search_playlists(query, playlist_limit),
        )
        .await;

        let success = songs.is_ok() || playlists.is_ok();

        let tracks = songs.unwrap_or_else(|e| {
            warn!(query = %query, error = %e, "Song search failed");
            Vec::new()
        });
        let playlists = playlists.unwrap_or_else(|e| {
            warn!(query = %query, error = %e, "Playlist search failed");
            Vec::new()
        });

        info!(
            query = %query,
            tracks = tracks.len(),
            playlists = playlists.len(),
            "Search completed"
        );

        SearchResults {
            tracks,
            playlists,
            success,
        }
    }

    async fn curated(&self, collection: CuratedCollection) -> TrackList {
        match self.fetch_curated(collection).await {
            Ok(tracks) => TrackList::from_tracks(tracks),
            Err(e) => {
                warn!(collection = %collection, error = %e, "Curated fetch failed");
                TrackList::failed()
            }
        }
    }

    async fn playlist(&self, id: &str) -> Option<PlaylistDetails> {
        self.fetch_playlist(id).await.unwrap_or_else(|e| {
            warn!(playlist_id = %id, error = %e, "Playlist fetch failed");
            None
        })
    }

    async fn song(&self, id: &str) -> Option<TrackRef> {
        self.fetch_song(id).await.unwrap_or_else(|e| {
            warn!(track_id = %id, error = %e, "Song fetch failed");
            None
        })
    }
}

fn search_params(query: &str, limit: usize) -> [(&'static str, String); 3] {
    [
        ("query", query.to_string()),
        ("page", "1".to_string()),
        ("limit", limit.to_string()),
    ]
}

/// Validate a base URL and strip trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
    }

    let parsed = Url::parse(trimmed).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
