/// Track domain type
use crate::quality::select_best_variant;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, immutable handle to a catalog track.
///
/// Queue, history, search results and user playlists all point at the same
/// allocation; tracks are never mutated after construction.
pub type TrackRef = Arc<Track>;

/// A quality-tagged URL for a media asset (audio stream or artwork)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaVariant {
    /// Quality label as reported by the catalog (e.g. "320kbps", "500x500")
    pub quality: String,

    /// Location of the asset
    pub url: String,
}

impl MediaVariant {
    /// Create a new variant
    pub fn new(quality: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            quality: quality.into(),
            url: url.into(),
        }
    }
}

/// Playable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Opaque catalog identifier (unique, never empty for accepted tracks)
    pub id: String,

    /// Display name
    pub name: String,

    /// Primary artist names
    #[serde(default)]
    pub artists: Vec<String>,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Language tag reported by the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Artwork variants
    #[serde(default)]
    pub images: Vec<MediaVariant>,

    /// Audio stream variants
    #[serde(default)]
    pub audio: Vec<MediaVariant>,

    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Play count reported by the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artists: Vec::new(),
            album: None,
            language: None,
            images: Vec::new(),
            audio: Vec::new(),
            duration: None,
            play_count: None,
        }
    }

    /// Set the artist list
    #[must_use]
    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists = artists.into_iter().map(Into::into).collect();
        self
    }

    /// Set the audio variants
    #[must_use]
    pub fn with_audio(mut self, variants: impl IntoIterator<Item = MediaVariant>) -> Self {
        self.audio = variants.into_iter().collect();
        self
    }

    /// Set the artwork variants
    #[must_use]
    pub fn with_images(mut self, variants: impl IntoIterator<Item = MediaVariant>) -> Self {
        self.images = variants.into_iter().collect();
        self
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> TrackRef {
        Arc::new(self)
    }

    /// Whether the track carries at least one audio variant
    pub fn is_playable(&self) -> bool {
        !self.audio.is_empty()
    }

    /// Whether the track has an identifier the engine can work with
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// URL of the best audio variant, or "" if none
    pub fn best_audio_url(&self) -> &str {
        select_best_variant(&self.audio)
    }

    /// URL of the best artwork variant, or "" if none
    pub fn best_image_url(&self) -> &str {
        select_best_variant(&self.images)
    }

    /// Artists joined for display ("A, B")
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}
