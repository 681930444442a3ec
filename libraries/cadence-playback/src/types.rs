//! Core types for playback management

use cadence_core::{ActivePlaylist, TrackRef};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Derived playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No current track
    Idle,
    /// A play request for the current track is still in flight
    Loading,
    /// Playing audio
    Playing,
    /// Current track set but not playing
    Paused,
}

/// Bounded retry applied when the output rejects a play request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Extra attempts (reload source, play again) after the first rejection
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 1 }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0-100, default: 50)
    pub volume: u8,

    /// Song limit used by `Engine::search` (default: 250)
    pub search_limit: usize,

    /// Retry policy for rejected play requests
    pub retry: RetryPolicy,

    /// Fixed shuffle seed; `None` seeds from entropy
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 50,
            search_limit: 250,
            retry: RetryPolicy::default(),
            shuffle_seed: None,
        }
    }
}

/// Read-only copy of the engine state for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Derived status
    pub status: PlaybackStatus,
    /// Track being played or paused
    pub current_track: Option<TrackRef>,
    /// Whether playback is requested
    pub is_playing: bool,
    /// Upcoming tracks, head first
    pub queue: Vec<TrackRef>,
    /// Played tracks, most recent first
    pub history: Vec<TrackRef>,
    /// Whether shuffle is on
    pub is_shuffle: bool,
    /// Volume level (0-100)
    pub volume: u8,
    /// Whether output is muted
    pub is_muted: bool,
    /// Last reported playback position
    pub position: Duration,
    /// Duration of the current track, if known
    pub duration: Option<Duration>,
    /// URL bound to the output device
    pub output_url: Option<String>,
    /// Active playlist selection
    pub active_playlist: ActivePlaylist,
}
