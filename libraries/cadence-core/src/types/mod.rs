mod collection;
mod playlist;
mod track;

pub use collection::{CuratedCollection, SearchResults, TrackList};
pub use playlist::{ActivePlaylist, PlaylistDetails, PlaylistSummary, UserPlaylist};
pub use track::{MediaVariant, Track, TrackRef};
