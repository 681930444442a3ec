//! Audio output abstraction
//!
//! The engine drives exactly one output device through this trait. Transport
//! commands are synchronous except `play`, which hands back a future that
//! resolves once the device has actually started (or refused to).

use crate::error::OutputError;
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Pending result of a play request
pub type PlayFuture = BoxFuture<'static, Result<(), OutputError>>;

/// Platform audio output
///
/// Implementors stream the URL bound with `set_source`. Device notifications
/// (end of track, position ticks) are fed back to the engine as
/// [`OutputEvent`]s by whoever owns the event loop.
pub trait AudioOutput: Send {
    /// Bind a new source URL
    fn set_source(&mut self, url: &str);

    /// (Re)load the bound source from the start
    fn load(&mut self);

    /// Begin playback of the bound source
    fn play(&mut self) -> PlayFuture;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead
    fn seek(&mut self, position: Duration);

    /// Set volume level (0-100)
    fn set_volume(&mut self, level: u8);

    /// Mute or unmute
    fn set_muted(&mut self, muted: bool);
}

/// Notifications raised by an output device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// The bound source played to its end
    Ended,
    /// Periodic playhead position
    TimeUpdate(Duration),
    /// Source metadata loaded; carries the track duration
    MetadataLoaded(Duration),
    /// Device-level error outside of a play request
    Error(String),
}
