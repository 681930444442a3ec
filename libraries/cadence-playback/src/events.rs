//! Playback Events
//!
//! Event-based communication for UI synchronization. Events accumulate in
//! the engine and are collected with `Engine::drain_events`.

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Derived status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new current track (`None` when playback ran out)
        track_id: Option<String>,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Queue changed (tracks added/removed/reordered)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// The output rejected every play attempt for a track
    PlaybackFailed {
        /// Track that could not be started
        track_id: String,
        /// Last rejection reason
        message: String,
    },

    /// User playlists were saved, deleted or edited
    PlaylistsChanged {
        /// Number of playlists now stored
        count: usize,
    },
}
