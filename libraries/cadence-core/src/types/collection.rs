/// Catalog response types and curated collection identifiers
use crate::types::{PlaylistSummary, TrackRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Themed collections the catalog can assemble from one or more queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CuratedCollection {
    /// Latest popular songs
    Trending,
    /// Modern chart hits
    ModernHits,
    /// Romantic songs (merged from several queries)
    Romantic,
    /// New releases across languages
    NewReleases,
    /// Haryanvi hits
    Haryanvi,
    /// Top songs, capped at 50
    Top100,
    /// Punjabi hits
    PunjabiHits,
}

impl CuratedCollection {
    /// Every collection, in display order
    pub const ALL: [CuratedCollection; 7] = [
        CuratedCollection::Trending,
        CuratedCollection::ModernHits,
        CuratedCollection::Haryanvi,
        CuratedCollection::Top100,
        CuratedCollection::PunjabiHits,
        CuratedCollection::NewReleases,
        CuratedCollection::Romantic,
    ];

    /// Stable kebab-case key
    pub fn key(self) -> &'static str {
        match self {
            CuratedCollection::Trending => "trending",
            CuratedCollection::ModernHits => "modern-hits",
            CuratedCollection::Romantic => "romantic",
            CuratedCollection::NewReleases => "new-releases",
            CuratedCollection::Haryanvi => "haryanvi",
            CuratedCollection::Top100 => "top100",
            CuratedCollection::PunjabiHits => "punjabi-hits",
        }
    }

    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            CuratedCollection::Trending => "Trending Now",
            CuratedCollection::ModernHits => "Modern Hits",
            CuratedCollection::Romantic => "Romantic Songs",
            CuratedCollection::NewReleases => "New Releases",
            CuratedCollection::Haryanvi => "Haryanvi Hits",
            CuratedCollection::Top100 => "Top 100",
            CuratedCollection::PunjabiHits => "Punjabi Hits",
        }
    }
}

impl fmt::Display for CuratedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CuratedCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|collection| collection.key() == wanted)
            .ok_or_else(|| format!("unknown collection '{}'", s))
    }
}

/// Result of a catalog search
///
/// `success` is false when neither the song nor the playlist query produced
/// a usable response (network failure, parse failure, or `success=false`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Playable matching songs
    pub tracks: Vec<TrackRef>,
    /// Matching playlists
    pub playlists: Vec<PlaylistSummary>,
    /// Whether at least one of the two queries returned data
    pub success: bool,
}

impl SearchResults {
    /// Failed search with no data
    pub fn failed() -> Self {
        Self::default()
    }

    /// Whether the search produced neither tracks nor playlists
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.playlists.is_empty()
    }
}

/// Result of a track-list fetch (curated collection or plain song search)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackList {
    /// Playable songs
    pub tracks: Vec<TrackRef>,
    /// False on failure or when nothing was found
    pub success: bool,
}

impl TrackList {
    /// Failed fetch with no data
    pub fn failed() -> Self {
        Self::default()
    }

    /// Successful fetch; `success` mirrors whether anything was found
    pub fn from_tracks(tracks: Vec<TrackRef>) -> Self {
        let success = !tracks.is_empty();
        Self { tracks, success }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_keys_round_trip() {
        for collection in CuratedCollection::ALL {
            let parsed: CuratedCollection = collection.key().parse().unwrap();
            assert_eq!(parsed, collection);
        }
    }

    #[test]
    fn collection_parse_is_lenient_about_case_and_underscores() {
        assert_eq!(
            "New_Releases".parse::<CuratedCollection>().unwrap(),
            CuratedCollection::NewReleases
        );
        assert!("polka".parse::<CuratedCollection>().is_err());
    }

    #[test]
    fn track_list_success_follows_content() {
        assert!(!TrackList::from_tracks(Vec::new()).success);
        assert!(!TrackList::failed().success);
    }
}
