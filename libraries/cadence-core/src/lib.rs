//! Cadence Core
//!
//! Platform-agnostic core types, traits, and error handling for Cadence.
//!
//! This crate provides the building blocks shared by the catalog client,
//! the playlist store and the playback engine.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `MediaVariant`, `PlaylistSummary`, `UserPlaylist`, etc.
//! - **Quality selection**: picking the best media variant of a track
//! - **Collaborator Traits**: `Catalog` (remote music service), `KeyValueStore` (persistence)
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{select_best_variant, MediaVariant, Track};
//!
//! let track = Track::new("a1", "Song A")
//!     .with_artists(["Artist"])
//!     .with_audio([
//!         MediaVariant::new("96kbps", "https://cdn.example.com/a1_96.mp4"),
//!         MediaVariant::new("320kbps", "https://cdn.example.com/a1_320.mp4"),
//!     ]);
//!
//! assert!(track.is_playable());
//! assert_eq!(track.best_audio_url(), "https://cdn.example.com/a1_320.mp4");
//! assert_eq!(select_best_variant(&[]), "");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod quality;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use quality::{select_best_variant, PREFERRED_QUALITIES};
pub use traits::{Catalog, KeyValueStore};

pub use types::{
    // Catalog entries
    MediaVariant, PlaylistDetails, PlaylistSummary, Track, TrackRef,
    // Catalog responses
    CuratedCollection, SearchResults, TrackList,
    // User collections
    ActivePlaylist, UserPlaylist,
};
