//! User playlist library.
//!
//! The library keeps every playlist in memory and mirrors the whole
//! collection to a single key of a [`KeyValueStore`] after each mutation.
//! There is no partial-update protocol: the stored value is always the full
//! map of playlist name to track list.

use crate::Result;
use cadence_core::{KeyValueStore, TrackRef, UserPlaylist};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Store key holding the serialized playlist map.
pub const PLAYLISTS_KEY: &str = "userPlaylists";

/// Named user playlists backed by a key-value store.
pub struct PlaylistLibrary {
    store: Box<dyn KeyValueStore>,
    playlists: BTreeMap<String, Vec<TrackRef>>,
}

impl PlaylistLibrary {
    /// Load the library from `store`.
    ///
    /// A missing key yields an empty library. An unreadable or corrupt value
    /// is logged and also treated as empty; it is overwritten by the next
    /// mutation.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let playlists = match store.get(PLAYLISTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<BTreeMap<String, Vec<TrackRef>>>(&raw) {
                Ok(playlists) => playlists,
                Err(e) => {
                    warn!(error = %e, "Stored playlists are corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored playlists, starting empty");
                BTreeMap::new()
            }
        };

        debug!(count = playlists.len(), "Loaded user playlists");

        Self { store, playlists }
    }

    /// Save `tracks` under `name`, replacing any playlist with that name.
    ///
    /// Returns `Ok(false)` without touching the store when the name is blank
    /// or the track list is empty.
    pub fn save(&mut self, name: &str, tracks: Vec<TrackRef>) -> Result<bool> {
        if name.trim().is_empty() || tracks.is_empty() {
            warn!(name, tracks = tracks.len(), "Refusing to save empty playlist");
            return Ok(false);
        }

        let count = tracks.len();
        self.playlists.insert(name.to_string(), tracks);
        self.persist()?;

        info!(name, tracks = count, "Saved playlist");
        Ok(true)
    }

    /// Delete the playlist called `name`. Missing names are a no-op.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        if self.playlists.remove(name).is_none() {
            warn!(name, "No playlist to delete");
            return Ok(false);
        }

        self.persist()?;
        info!(name, "Deleted playlist");
        Ok(true)
    }

    /// Append `track` to `name`, creating the playlist if it does not exist.
    pub fn add_track(&mut self, name: &str, track: TrackRef) -> Result<bool> {
        if name.trim().is_empty() || !track.has_id() {
            warn!(name, "Refusing to add track without playlist name or id");
            return Ok(false);
        }

        let track_id = track.id.clone();
        self.playlists.entry(name.to_string()).or_default().push(track);
        self.persist()?;

        debug!(name, track_id = %track_id, "Added track to playlist");
        Ok(true)
    }

    /// Remove every occurrence of `track_id` from `name`.
    ///
    /// A missing playlist is a no-op. The playlist is kept (possibly empty)
    /// after its last track is removed.
    pub fn remove_track(&mut self, name: &str, track_id: &str) -> Result<bool> {
        if track_id.is_empty() {
            warn!(name, "Refusing to remove track with empty id");
            return Ok(false);
        }

        let Some(tracks) = self.playlists.get_mut(name) else {
            warn!(name, "No playlist to remove from");
            return Ok(false);
        };

        let before = tracks.len();
        tracks.retain(|track| track.id != track_id);
        let removed = before - tracks.len();

        self.persist()?;
        debug!(name, track_id, removed, "Removed track from playlist");
        Ok(removed > 0)
    }

    /// All playlists, ordered by name.
    pub fn list_all(&self) -> Vec<UserPlaylist> {
        self.playlists
            .iter()
            .map(|(name, songs)| UserPlaylist {
                name: name.clone(),
                songs: songs.clone(),
            })
            .collect()
    }

    /// Tracks of the playlist called `name`.
    pub fn get(&self, name: &str) -> Option<&[TrackRef]> {
        self.playlists.get(name).map(Vec::as_slice)
    }

    /// Whether a playlist called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(name)
    }

    /// Number of playlists.
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether the library has no playlists.
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.playlists)?;
        self.store.set(PLAYLISTS_KEY, &raw)?;
        Ok(())
    }
}

impl std::fmt::Debug for PlaylistLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistLibrary")
            .field("playlists", &self.playlists.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
