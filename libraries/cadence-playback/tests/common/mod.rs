//! Shared helpers for engine tests
#![allow(dead_code, clippy::new_without_default)]

use async_trait::async_trait;
use cadence_core::{
    Catalog, CuratedCollection, KeyValueStore, MediaVariant, PlaylistDetails, SearchResults,
    Track, TrackList, TrackRef,
};
use cadence_playback::{AudioOutput, Engine, OutputError, PlayFuture, PlaybackConfig};
use cadence_storage::MemoryStore;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

// ===== Tracks =====

/// Playable track with a 96kbps and a 320kbps variant
pub fn track(id: &str) -> TrackRef {
    Track::new(id, format!("Song {}", id.to_uppercase()))
        .with_artists(["Test Artist"])
        .with_audio([
            MediaVariant::new("96kbps", format!("https://audio.test/{}-96.mp4", id)),
            MediaVariant::new("320kbps", format!("https://audio.test/{}.mp4", id)),
        ])
        .with_duration(180)
        .into_ref()
}

pub fn tracks(ids: &[&str]) -> Vec<TrackRef> {
    ids.iter().map(|id| track(id)).collect()
}

pub fn ids(tracks: &[TrackRef]) -> Vec<String> {
    tracks.iter().map(|t| t.id.clone()).collect()
}

pub fn url_of(id: &str) -> String {
    format!("https://audio.test/{}.mp4", id)
}

// ===== Mock Output =====

/// Command received by the mock output, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetSource(String),
    Load,
    Play,
    Pause,
    Seek(Duration),
    Volume(u8),
    Muted(bool),
}

/// How the next play request resolves
pub enum PlayScript {
    Resolve,
    Reject(OutputError),
    Hold(oneshot::Receiver<Result<(), OutputError>>),
}

#[derive(Default)]
struct OutputState {
    commands: Vec<Command>,
    script: VecDeque<PlayScript>,
}

/// Output device that records commands and resolves plays from a script
///
/// Unscripted play requests resolve successfully. Clones share state.
#[derive(Clone, Default)]
pub struct MockOutput {
    state: Arc<Mutex<OutputState>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of an upcoming play request
    pub fn script(&self, outcome: PlayScript) {
        self.state.lock().unwrap().script.push_back(outcome);
    }

    pub fn reject_next(&self, error: OutputError) {
        self.script(PlayScript::Reject(error));
    }

    /// Keep the next play request pending until the sender fires
    pub fn hold_next(&self) -> oneshot::Sender<Result<(), OutputError>> {
        let (tx, rx) = oneshot::channel();
        self.script(PlayScript::Hold(rx));
        tx
    }

    pub fn commands(&self) -> Vec<Command> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.lock().unwrap().commands.clear();
    }

    pub fn count(&self, wanted: &Command) -> usize {
        self.commands().iter().filter(|c| *c == wanted).count()
    }

    pub fn plays(&self) -> usize {
        self.count(&Command::Play)
    }

    pub fn pauses(&self) -> usize {
        self.count(&Command::Pause)
    }

    /// Last bound source URL
    pub fn source(&self) -> Option<String> {
        self.commands().iter().rev().find_map(|c| match c {
            Command::SetSource(url) => Some(url.clone()),
            _ => None,
        })
    }

    fn record(&self, command: Command) {
        self.state.lock().unwrap().commands.push(command);
    }
}

impl AudioOutput for MockOutput {
    fn set_source(&mut self, url: &str) {
        self.record(Command::SetSource(url.to_string()));
    }

    fn load(&mut self) {
        self.record(Command::Load);
    }

    fn play(&mut self) -> PlayFuture {
        self.record(Command::Play);
        let next = self.state.lock().unwrap().script.pop_front();
        match next {
            None | Some(PlayScript::Resolve) => Box::pin(async { Ok(()) }),
            Some(PlayScript::Reject(error)) => Box::pin(async move { Err(error) }),
            Some(PlayScript::Hold(rx)) => {
                Box::pin(async move { rx.await.unwrap_or(Err(OutputError::Aborted)) })
            }
        }
    }

    fn pause(&mut self) {
        self.record(Command::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.record(Command::Seek(position));
    }

    fn set_volume(&mut self, level: u8) {
        self.record(Command::Volume(level));
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(Command::Muted(muted));
    }
}

// ===== Stub Catalog =====

/// Catalog answering from canned data and counting requests
#[derive(Default)]
pub struct StubCatalog {
    pub search_results: Mutex<Option<SearchResults>>,
    pub collections: Mutex<HashMap<CuratedCollection, TrackList>>,
    pub playlists: Mutex<HashMap<String, PlaylistDetails>>,
    pub search_calls: Mutex<Vec<(String, usize)>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, tracks: Vec<TrackRef>) -> Self {
        *self.search_results.lock().unwrap() = Some(SearchResults {
            tracks,
            playlists: Vec::new(),
            success: true,
        });
        self
    }

    pub fn with_collection(self, collection: CuratedCollection, tracks: Vec<TrackRef>) -> Self {
        self.collections
            .lock()
            .unwrap()
            .insert(collection, TrackList::from_tracks(tracks));
        self
    }

    pub fn with_playlist(self, id: &str, songs: Vec<TrackRef>) -> Self {
        self.playlists.lock().unwrap().insert(
            id.to_string(),
            PlaylistDetails {
                id: id.to_string(),
                name: format!("Playlist {}", id),
                description: None,
                song_count: Some(songs.len() as u32),
                images: Vec::new(),
                songs,
            },
        );
        self
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn search(&self, query: &str, limit: usize) -> SearchResults {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        self.search_results
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(SearchResults::failed)
    }

    async fn curated(&self, collection: CuratedCollection) -> TrackList {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_else(TrackList::failed)
    }

    async fn playlist(&self, id: &str) -> Option<PlaylistDetails> {
        self.playlists.lock().unwrap().get(id).cloned()
    }

    async fn song(&self, _id: &str) -> Option<TrackRef> {
        None
    }
}

// ===== Engine =====

/// Engine wired to a mock output, a stub catalog and a memory store
pub struct Harness {
    pub engine: Engine,
    pub output: MockOutput,
    pub catalog: Arc<StubCatalog>,
    pub store: MemoryStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_catalog(StubCatalog::new())
    }

    pub fn with_catalog(catalog: StubCatalog) -> Self {
        Self::build(PlaybackConfig::default(), catalog, MemoryStore::new())
    }

    pub fn with_config(config: PlaybackConfig) -> Self {
        Self::build(config, StubCatalog::new(), MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::build(PlaybackConfig::default(), StubCatalog::new(), store)
    }

    fn build(config: PlaybackConfig, catalog: StubCatalog, store: MemoryStore) -> Self {
        let output = MockOutput::new();
        let catalog = Arc::new(catalog);
        let engine = Engine::new(
            config,
            Box::new(output.clone()),
            catalog.clone(),
            Box::new(store.clone()) as Box<dyn KeyValueStore>,
        );
        Self {
            engine,
            output,
            catalog,
            store,
        }
    }

    pub fn queue_ids(&self) -> Vec<String> {
        ids(&self.engine.queue())
    }

    pub fn history_ids(&self) -> Vec<String> {
        ids(&self.engine.history())
    }

    pub fn current_id(&self) -> Option<String> {
        self.engine.current_track().map(|t| t.id.clone())
    }
}

/// Config with a fixed shuffle seed
pub fn seeded_config(seed: u64) -> PlaybackConfig {
    PlaybackConfig {
        shuffle_seed: Some(seed),
        ..PlaybackConfig::default()
    }
}
