//! Error types for playback management

use thiserror::Error;

/// Failure reported by an audio output when asked to begin playback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// A newer load or pause interrupted the request
    #[error("Play request aborted by a newer request")]
    Aborted,

    /// The device refused to start (e.g. autoplay policy)
    #[error("Playback not allowed: {0}")]
    NotAllowed(String),

    /// The source could not be decoded or fetched
    #[error("Unsupported source: {0}")]
    Unsupported(String),

    /// Any other device failure
    #[error("Output device error: {0}")]
    Device(String),
}

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Every play attempt for a track was rejected
    #[error("Playback of {track_id} failed after {attempts} attempt(s): {source}")]
    PlayFailed {
        /// Track that could not be started
        track_id: String,
        /// Number of play requests issued
        attempts: u32,
        /// Last rejection
        #[source]
        source: OutputError,
    },

    /// Persisting user playlists failed
    #[error(transparent)]
    Storage(#[from] cadence_storage::StorageError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
