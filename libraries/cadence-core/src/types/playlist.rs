/// Playlist domain types
use crate::types::{MediaVariant, TrackRef};
use serde::{Deserialize, Serialize};

/// Playlist as listed in catalog search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    /// Catalog identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Artwork variants
    #[serde(default)]
    pub images: Vec<MediaVariant>,

    /// Number of songs, when the catalog reports it
    #[serde(default)]
    pub song_count: Option<u32>,

    /// Language tag
    #[serde(default)]
    pub language: Option<String>,

    /// Public page of the playlist
    #[serde(default)]
    pub url: Option<String>,
}

/// Playlist fetched by id, including its playable songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetails {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Song count reported by the catalog (may exceed `songs.len()`)
    #[serde(default)]
    pub song_count: Option<u32>,
    /// Artwork variants
    #[serde(default)]
    pub images: Vec<MediaVariant>,
    /// Playable songs, in playlist order
    #[serde(default)]
    pub songs: Vec<TrackRef>,
}

/// User-owned playlist, keyed by its unique name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPlaylist {
    /// Unique name within the user's collection
    pub name: String,
    /// Songs in playlist order (duplicates allowed)
    pub songs: Vec<TrackRef>,
}

/// Playlist currently opened in the playlist browser
///
/// Transient UI-facing selection, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivePlaylist {
    /// Name of the selection, `None` when nothing is selected
    pub name: Option<String>,

    /// Songs shown for the selection
    pub songs: Vec<TrackRef>,
}

impl ActivePlaylist {
    /// Whether a playlist is selected
    pub fn is_selected(&self) -> bool {
        self.name.is_some()
    }
}
