/// Logging audio output
///
/// Stands in for a real device on the command line: every transport command
/// is logged and play requests start immediately.
use cadence_playback::{AudioOutput, PlayFuture};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct LogOutput {
    source: Option<String>,
    playing: bool,
}

impl LogOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL bound by the last `set_source`
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioOutput for LogOutput {
    fn set_source(&mut self, url: &str) {
        debug!(url, "Output source");
        self.source = Some(url.to_string());
        self.playing = false;
    }

    fn load(&mut self) {
        debug!("Output load");
    }

    fn play(&mut self) -> PlayFuture {
        info!(url = self.source.as_deref().unwrap_or_default(), "Output play");
        self.playing = true;
        Box::pin(async { Ok(()) })
    }

    fn pause(&mut self) {
        info!("Output pause");
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) {
        debug!(position_secs = position.as_secs(), "Output seek");
    }

    fn set_volume(&mut self, level: u8) {
        debug!(level, "Output volume");
    }

    fn set_muted(&mut self, muted: bool) {
        debug!(muted, "Output mute");
    }
}
