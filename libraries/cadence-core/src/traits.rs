/// Collaborator traits for Cadence
use crate::error::Result;
use crate::types::{CuratedCollection, PlaylistDetails, SearchResults, TrackList, TrackRef};
use async_trait::async_trait;

/// Remote music catalog
///
/// Implementations never fail: network and parse problems are reported
/// through the `success` flag of the returned value (or `None`), so callers
/// can always render something.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search songs (up to `limit`) and playlists matching `query`
    async fn search(&self, query: &str, limit: usize) -> SearchResults;

    /// Assemble a curated collection
    async fn curated(&self, collection: CuratedCollection) -> TrackList;

    /// Fetch a playlist and its playable songs by catalog id
    async fn playlist(&self, id: &str) -> Option<PlaylistDetails>;

    /// Fetch a single song by catalog id
    async fn song(&self, id: &str) -> Option<TrackRef>;
}

/// Key-value persistence backend
///
/// Values are opaque strings (the playlist library stores JSON). Writes are
/// synchronous and replace the previous value wholesale.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
