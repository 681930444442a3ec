//! `cadence play`
use super::track_line;
use crate::output::LogOutput;
use anyhow::{bail, Result};
use cadence_core::{Catalog, KeyValueStore};
use cadence_playback::{Engine, OutputEvent, PlaybackConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for a play session
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub query: String,
    /// Number of tracks to step through
    pub tracks: usize,
    pub shuffle: bool,
}

/// Search, play the first hit with the results as queue, then auto-advance
///
/// Returns the ids of the tracks that were played, in order.
pub async fn run(
    config: PlaybackConfig,
    catalog: Arc<dyn Catalog>,
    store: Box<dyn KeyValueStore>,
    options: &PlayOptions,
) -> Result<Vec<String>> {
    let mut engine = Engine::new(config, Box::new(LogOutput::new()), catalog, store);

    let results = engine.search(&options.query).await;
    let Some(first) = results.tracks.first().cloned() else {
        bail!("No playable results for '{}'", options.query.trim());
    };

    if options.shuffle {
        engine.toggle_shuffle();
    }
    engine.play_track(first, &results.tracks, true);

    let mut played = Vec::new();
    while played.len() < options.tracks.max(1) {
        if let Err(e) = engine.settle().await {
            warn!(error = %e, "Playback did not start");
        }

        let Some(track) = engine.current_track().cloned() else {
            break;
        };
        println!("Now playing: {}", track_line(&track));
        played.push(track.id.clone());

        for event in engine.drain_events() {
            debug!(?event, "Engine event");
        }

        if played.len() < options.tracks {
            engine.handle_output_event(OutputEvent::Ended);
        }
    }

    println!("Up next: {} tracks", engine.queue_len());
    engine.shutdown();
    Ok(played)
}
