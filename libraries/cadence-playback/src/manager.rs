//! Playback engine - core orchestration
//!
//! Coordinates the current track, queue, history, shuffle, volume, the audio
//! output and the user playlist library.
//!
//! All state transitions are synchronous. The only suspension points are
//! catalog calls (`search`, `load_collections`, `load_and_play_playlist`)
//! and waiting for the device to start playing (`settle`).

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    history::History,
    inflight::{PendingPlay, PlaySlot},
    output::{AudioOutput, OutputEvent},
    queue::Queue,
    shuffle::Shuffler,
    types::{PlaybackConfig, PlaybackSnapshot, PlaybackStatus},
    volume::Volume,
};
use cadence_core::{
    ActivePlaylist, Catalog, CuratedCollection, KeyValueStore, PlaylistDetails, PlaylistSummary,
    SearchResults, TrackRef, UserPlaylist,
};
use cadence_storage::PlaylistLibrary;
use futures_util::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Playback/queue engine
///
/// Single owner of the audio output, the queue, the history and the user
/// playlists. Presentation code calls operations, then re-reads state
/// (`snapshot`, getters) and collects [`PlaybackEvent`]s with
/// `drain_events`.
///
/// Invariant: `is_playing` implies a current track whose best audio variant
/// is bound to the output.
pub struct Engine {
    config: PlaybackConfig,

    // Collaborators
    output: Box<dyn AudioOutput>,
    catalog: Arc<dyn Catalog>,
    library: PlaylistLibrary,

    // Playback state
    current_track: Option<TrackRef>,
    is_playing: bool,
    output_url: Option<String>,
    position: Duration,
    duration: Option<Duration>,
    play_slot: PlaySlot,

    // Queue and history
    queue: Queue,
    history: History,
    is_shuffle: bool,
    shuffler: Shuffler,

    volume: Volume,

    // Catalog results
    search_results: Vec<TrackRef>,
    search_playlist_results: Vec<PlaylistSummary>,
    collections: BTreeMap<CuratedCollection, Vec<TrackRef>>,

    active_playlist: ActivePlaylist,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
    last_status: PlaybackStatus,
}

impl Engine {
    /// Create the engine and load persisted user playlists from `store`
    pub fn new(
        config: PlaybackConfig,
        mut output: Box<dyn AudioOutput>,
        catalog: Arc<dyn Catalog>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let volume = Volume::new(config.volume);
        output.set_volume(volume.level());
        output.set_muted(volume.is_muted());

        let library = PlaylistLibrary::open(store);
        info!(
            playlists = library.len(),
            history_size = config.history_size,
            "Playback engine started"
        );

        Self {
            history: History::new(config.history_size),
            shuffler: Shuffler::new(config.shuffle_seed),
            config,
            output,
            catalog,
            library,
            current_track: None,
            is_playing: false,
            output_url: None,
            position: Duration::ZERO,
            duration: None,
            play_slot: PlaySlot::default(),
            queue: Queue::new(),
            is_shuffle: false,
            volume,
            search_results: Vec::new(),
            search_playlist_results: Vec::new(),
            collections: BTreeMap::new(),
            active_playlist: ActivePlaylist::default(),
            pending_events: Vec::new(),
            last_status: PlaybackStatus::Idle,
        }
    }

    /// Discard any pending play and pause the device
    pub fn shutdown(mut self) {
        self.play_slot.supersede();
        if self.is_playing {
            self.output.pause();
            self.is_playing = false;
        }
        info!("Playback engine stopped");
    }

    // ===== Playback Control =====

    /// Play `track`, optionally rebuilding the queue from `context`
    ///
    /// With `update_queue` and a non-empty `context`, the queue becomes the
    /// entries after the first occurrence of `track` in `context`, or all of
    /// `context` when `track` is not in it. With shuffle on the new queue is
    /// shuffled and its unshuffled order kept for restoring.
    pub fn play_track(&mut self, track: TrackRef, context: &[TrackRef], update_queue: bool) {
        if !track.has_id() {
            warn!("Ignoring play request for track without id");
            return;
        }

        debug!(
            track_id = %track.id,
            context_len = context.len(),
            update_queue,
            "Play track"
        );

        if update_queue && !context.is_empty() {
            let upcoming = match context.iter().position(|t| t.id == track.id) {
                Some(index) => context[index + 1..].to_vec(),
                None => {
                    debug!(track_id = %track.id, "Track not in context, queueing whole context");
                    context.to_vec()
                }
            };
            self.install_queue(upcoming);
        }

        let previous = self.current_track.replace(track);
        self.is_playing = true;
        self.rebind(previous.map(|t| t.id.clone()));
        self.sync_status();
    }

    /// Play the first track and queue the rest
    pub fn play_all_from_playlist(&mut self, tracks: &[TrackRef]) {
        let Some((first, rest)) = tracks.split_first() else {
            warn!("Attempted to play empty playlist");
            return;
        };

        self.queue.replace(rest.to_vec());
        if self.is_shuffle {
            self.queue.set_snapshot(rest.to_vec());
        }
        self.emit_queue_changed();

        self.play_track(Arc::clone(first), &[], false);
    }

    /// Play the first track with the whole list as queue context
    pub fn play_playlist(&mut self, tracks: &[TrackRef]) {
        let Some(first) = tracks.first() else {
            warn!("Attempted to play empty playlist");
            return;
        };
        self.play_track(Arc::clone(first), tracks, true);
    }

    /// Pause playback; pausing while paused issues no device command
    pub fn pause(&mut self) {
        self.play_slot.supersede();

        if !self.is_playing {
            debug!("Already paused");
            return;
        }

        self.is_playing = false;
        self.output.pause();
        self.sync_status();
    }

    /// Resume playback of the current track
    pub fn resume(&mut self) {
        if self.current_track.is_none() {
            warn!("Tried to resume with no current track");
            return;
        }
        if self.is_playing {
            return;
        }
        if self.output_url.is_none() {
            warn!("Current track has no playable source");
            return;
        }

        self.is_playing = true;
        self.request_play();
        self.sync_status();
    }

    /// Pause when playing, resume otherwise
    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Advance to the head of the queue; no-op when the queue is empty
    pub fn skip_to_next(&mut self) {
        let Some(next) = self.queue.pop_front() else {
            debug!("No next track in queue");
            return;
        };

        let previous = self.current_track.replace(next);
        if let Some(track) = &previous {
            self.history.push(Arc::clone(track));
        }

        self.is_playing = true;
        self.emit_queue_changed();
        self.rebind(previous.map(|t| t.id.clone()));
        self.sync_status();
    }

    /// Go back to the most recent history entry
    ///
    /// With an empty history the current track restarts from zero.
    pub fn skip_to_previous(&mut self) {
        if let Some(previous) = self.history.pop() {
            let current = self.current_track.replace(previous);
            if let Some(track) = &current {
                self.queue.push_front(Arc::clone(track));
                self.emit_queue_changed();
            }

            self.is_playing = true;
            self.rebind(current.map(|t| t.id.clone()));
        } else if self.current_track.is_some() {
            debug!("No history, restarting current track");
            self.output.seek(Duration::ZERO);
            self.position = Duration::ZERO;

            if !self.is_playing && self.output_url.is_some() {
                self.is_playing = true;
                self.request_play();
            }
        } else {
            warn!("Nothing to go back to");
        }

        self.sync_status();
    }

    /// Move the playhead of the current track
    pub fn seek_to(&mut self, position: Duration) {
        if self.current_track.is_none() {
            warn!("Tried to seek with no current track");
            return;
        }

        let position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        self.output.seek(position);
        self.position = position;
    }

    // ===== Queue Management =====

    /// Append to the end of the queue
    pub fn add_to_queue(&mut self, track: TrackRef) {
        if !track.has_id() {
            warn!("Ignoring queue request for track without id");
            return;
        }
        debug!(track_id = %track.id, "Adding to queue");
        self.queue.push_back(track);
        self.emit_queue_changed();
    }

    /// Drop every queued track and the shuffle snapshot
    pub fn empty_queue(&mut self) {
        self.queue.empty();
        self.emit_queue_changed();
    }

    /// Drop every queued track, keeping the shuffle snapshot
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    /// Replace the queue contents
    pub fn set_queue(&mut self, tracks: Vec<TrackRef>) {
        let before = tracks.len();
        let tracks: Vec<TrackRef> = tracks.into_iter().filter(|t| t.has_id()).collect();
        if tracks.len() < before {
            warn!(dropped = before - tracks.len(), "Dropped tracks without id from queue");
        }
        self.queue.replace(tracks);
        self.emit_queue_changed();
    }

    // ===== Shuffle =====

    /// Flip shuffle
    ///
    /// Turning on remembers the queue and permutes it; turning off puts the
    /// remembered queue back as it was.
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffle = !self.is_shuffle;

        if self.is_shuffle {
            self.queue.take_snapshot();
            self.shuffler.shuffle(self.queue.as_mut_slice());
        } else if !self.queue.restore_snapshot() {
            debug!("No snapshot to restore");
        }

        debug!(enabled = self.is_shuffle, queue_len = self.queue.len(), "Shuffle toggled");
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.is_shuffle,
        });
        self.emit_queue_changed();
    }

    // ===== Volume =====

    /// Set volume level (0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.output.set_volume(self.volume.level());
        self.emit_volume_changed();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.volume.set_muted(muted);
        self.output.set_muted(muted);
        self.emit_volume_changed();
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.volume.is_muted());
    }

    // ===== Device Events =====

    /// Apply a notification from the output device
    pub fn handle_output_event(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Ended => self.advance_after_end(),
            OutputEvent::TimeUpdate(position) => self.position = position,
            OutputEvent::MetadataLoaded(duration) => self.duration = Some(duration),
            OutputEvent::Error(message) => {
                warn!(
                    track_id = ?self.current_track.as_ref().map(|t| t.id.as_str()),
                    error = %message,
                    "Output device error"
                );
            }
        }
    }

    /// Wait for the pending play request, retrying per the retry policy
    ///
    /// Each retry rebinds the source, reloads it and plays again. When every
    /// attempt is rejected playback degrades to paused and a
    /// `PlaybackFailed` event is emitted.
    pub async fn settle(&mut self) -> Result<()> {
        let Some(PendingPlay { track_id, future }) = self.play_slot.take() else {
            return Ok(());
        };

        let mut attempts = 1;
        let mut outcome = future.await;

        loop {
            match outcome {
                Ok(()) => {
                    debug!(track_id = %track_id, attempts, "Playback started");
                    self.sync_status();
                    return Ok(());
                }
                Err(e) if attempts <= self.config.retry.max_retries => {
                    warn!(
                        track_id = %track_id,
                        attempt = attempts,
                        error = %e,
                        "Play request rejected, reloading and retrying"
                    );
                    if let Some(url) = &self.output_url {
                        self.output.set_source(url);
                    }
                    self.output.load();
                    attempts += 1;
                    outcome = self.output.play().await;
                }
                Err(e) => {
                    warn!(track_id = %track_id, attempts, error = %e, "Giving up on playback");
                    self.is_playing = false;
                    self.pending_events.push(PlaybackEvent::PlaybackFailed {
                        track_id: track_id.clone(),
                        message: e.to_string(),
                    });
                    self.sync_status();
                    return Err(PlaybackError::PlayFailed {
                        track_id,
                        attempts,
                        source: e,
                    });
                }
            }
        }
    }

    // ===== Catalog =====

    /// Search the catalog and keep the results
    ///
    /// A blank query is rejected without a request.
    pub async fn search(&mut self, query: &str) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            warn!("Ignoring empty search query");
            return SearchResults::failed();
        }

        let mut results = self.catalog.search(query, self.config.search_limit).await;
        results.tracks.retain(|t| t.is_playable());

        if !results.success {
            warn!(query, "Search unsuccessful");
        }

        self.search_results = results.tracks.clone();
        self.search_playlist_results = results.playlists.clone();
        results
    }

    /// Fetch every curated collection; returns how many loaded
    pub async fn load_collections(&mut self) -> usize {
        let lists = join_all(
            CuratedCollection::ALL
                .iter()
                .map(|&collection| self.catalog.curated(collection)),
        )
        .await;

        let mut loaded = 0;
        for (collection, list) in CuratedCollection::ALL.into_iter().zip(lists) {
            if list.success {
                let tracks: Vec<TrackRef> =
                    list.tracks.into_iter().filter(|t| t.is_playable()).collect();
                debug!(collection = %collection, tracks = tracks.len(), "Loaded collection");
                self.collections.insert(collection, tracks);
                loaded += 1;
            } else {
                warn!(collection = %collection, "Failed to load collection");
            }
        }

        info!(loaded, total = CuratedCollection::ALL.len(), "Collections loaded");
        loaded
    }

    /// Fetch a catalog playlist and, with `autoplay`, play it from the top
    ///
    /// Returns the playlist with only playable songs, or `None` when it
    /// could not be loaded or has nothing playable.
    pub async fn load_and_play_playlist(
        &mut self,
        playlist_id: &str,
        autoplay: bool,
    ) -> Option<PlaylistDetails> {
        let playlist_id = playlist_id.trim();
        if playlist_id.is_empty() {
            warn!("Ignoring playlist request without id");
            return None;
        }

        let Some(mut details) = self.catalog.playlist(playlist_id).await else {
            warn!(playlist_id, "Failed to load playlist");
            return None;
        };

        details.songs.retain(|t| t.is_playable());
        if details.songs.is_empty() {
            warn!(playlist_id, "Playlist has no playable songs");
            return None;
        }

        info!(playlist_id, songs = details.songs.len(), "Playlist loaded");
        if autoplay {
            self.play_all_from_playlist(&details.songs);
        }
        Some(details)
    }

    // ===== User Playlists =====

    /// Save `tracks` as a user playlist, replacing any with the same name
    pub fn save_playlist(&mut self, name: &str, tracks: Vec<TrackRef>) -> Result<bool> {
        let changed = self.library.save(name, tracks)?;
        self.after_playlist_change(name, changed);
        Ok(changed)
    }

    /// Delete a user playlist; missing names are a no-op
    pub fn delete_playlist(&mut self, name: &str) -> Result<bool> {
        let changed = self.library.delete(name)?;
        if changed && self.active_playlist.name.as_deref() == Some(name) {
            self.active_playlist = ActivePlaylist::default();
        }
        if changed {
            self.emit_playlists_changed();
        }
        Ok(changed)
    }

    /// Append a track to a user playlist, creating it if needed
    pub fn add_to_playlist(&mut self, name: &str, track: TrackRef) -> Result<bool> {
        let changed = self.library.add_track(name, track)?;
        self.after_playlist_change(name, changed);
        Ok(changed)
    }

    /// Remove every occurrence of a track from a user playlist
    pub fn remove_from_playlist(&mut self, name: &str, track_id: &str) -> Result<bool> {
        let changed = self.library.remove_track(name, track_id)?;
        self.after_playlist_change(name, changed);
        Ok(changed)
    }

    /// Select a playlist for display
    pub fn set_active_playlist(&mut self, name: Option<String>, songs: Vec<TrackRef>) {
        debug!(name = ?name, songs = songs.len(), "Setting active playlist");
        self.active_playlist = ActivePlaylist { name, songs };
    }

    /// Select a saved user playlist for display; false if it does not exist
    pub fn activate_playlist(&mut self, name: &str) -> bool {
        let Some(songs) = self.library.get(name).map(<[TrackRef]>::to_vec) else {
            debug!(name, "No such playlist to activate");
            return false;
        };
        self.set_active_playlist(Some(name.to_string()), songs);
        true
    }

    // ===== State Queries =====

    pub fn current_track(&self) -> Option<&TrackRef> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Queued tracks, head first
    pub fn queue(&self) -> Vec<TrackRef> {
        self.queue.to_vec()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Played tracks, most recent first
    pub fn history(&self) -> Vec<TrackRef> {
        self.history.to_vec()
    }

    pub fn is_shuffle(&self) -> bool {
        self.is_shuffle
    }

    pub fn search_results(&self) -> &[TrackRef] {
        &self.search_results
    }

    pub fn search_playlist_results(&self) -> &[PlaylistSummary] {
        &self.search_playlist_results
    }

    /// Tracks of a loaded curated collection (empty until loaded)
    pub fn collection(&self, collection: CuratedCollection) -> &[TrackRef] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn user_playlists(&self) -> Vec<UserPlaylist> {
        self.library.list_all()
    }

    /// Tracks of a saved user playlist
    pub fn user_playlist(&self, name: &str) -> Option<&[TrackRef]> {
        self.library.get(name)
    }

    pub fn active_playlist(&self) -> &ActivePlaylist {
        &self.active_playlist
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// URL currently bound to the output device
    pub fn output_url(&self) -> Option<&str> {
        self.output_url.as_deref()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Derived playback status
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), true) if self.play_slot.is_pending() => PlaybackStatus::Loading,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    /// Read-only copy of the presentation-facing state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.status(),
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            queue: self.queue(),
            history: self.history(),
            is_shuffle: self.is_shuffle,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            position: self.position,
            duration: self.duration,
            output_url: self.output_url.clone(),
            active_playlist: self.active_playlist.clone(),
        }
    }

    // ===== Events =====

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn install_queue(&mut self, upcoming: Vec<TrackRef>) {
        if self.is_shuffle {
            let mut shuffled = upcoming.clone();
            self.shuffler.shuffle(&mut shuffled);
            self.queue.replace(shuffled);
            self.queue.set_snapshot(upcoming);
        } else {
            self.queue.replace(upcoming);
        }
        self.emit_queue_changed();
    }

    /// Bind the current track's best audio variant and, if playing, start it
    fn rebind(&mut self, previous_track_id: Option<String>) {
        let Some(track) = self.current_track.clone() else {
            return;
        };

        self.play_slot.supersede();
        self.position = Duration::ZERO;
        self.duration = track.duration.map(|secs| Duration::from_secs(u64::from(secs)));
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: Some(track.id.clone()),
            previous_track_id,
        });

        let url = track.best_audio_url();
        if url.is_empty() {
            warn!(track_id = %track.id, "No playable audio variant");
            self.output_url = None;
            self.is_playing = false;
            self.pending_events.push(PlaybackEvent::PlaybackFailed {
                track_id: track.id.clone(),
                message: "no playable audio variant".to_string(),
            });
            return;
        }

        self.output.set_source(url);
        self.output.load();
        self.output_url = Some(url.to_string());
        debug!(track_id = %track.id, url, "Bound output source");

        if self.is_playing {
            self.request_play();
        }
    }

    fn request_play(&mut self) {
        let Some(track_id) = self.current_track.as_ref().map(|t| t.id.clone()) else {
            return;
        };
        self.play_slot.supersede();
        let future = self.output.play();
        self.play_slot.begin(track_id, future);
    }

    fn advance_after_end(&mut self) {
        if !self.queue.is_empty() {
            self.skip_to_next();
            return;
        }

        self.play_slot.supersede();
        let finished = self.current_track.take();
        if let Some(track) = &finished {
            self.history.push(Arc::clone(track));
        }

        self.is_playing = false;
        self.output_url = None;
        self.position = Duration::ZERO;
        self.duration = None;
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: None,
            previous_track_id: finished.map(|t| t.id.clone()),
        });

        info!("Reached end of queue");
        self.sync_status();
    }

    fn after_playlist_change(&mut self, name: &str, changed: bool) {
        if !changed {
            return;
        }
        if self.active_playlist.name.as_deref() == Some(name) {
            if let Some(songs) = self.library.get(name) {
                self.active_playlist.songs = songs.to_vec();
            }
        }
        self.emit_playlists_changed();
    }

    fn sync_status(&mut self) {
        let status = self.status();
        if status != self.last_status {
            self.last_status = status;
            self.pending_events.push(PlaybackEvent::StateChanged { status });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_playlists_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::PlaylistsChanged {
            count: self.library.len(),
        });
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("status", &self.status())
            .field("current_track", &self.current_track.as_ref().map(|t| &t.id))
            .field("queue_len", &self.queue.len())
            .field("history_len", &self.history.len())
            .field("is_shuffle", &self.is_shuffle)
            .field("play_slot", &self.play_slot)
            .finish_non_exhaustive()
    }
}
