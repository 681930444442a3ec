//! Cadence - Playback Engine
//!
//! Platform-agnostic playback and queue management for Cadence.
//!
//! This crate provides:
//! - Current track, queue and bounded history
//! - Shuffle with restorable original order
//! - Volume and mute
//! - A single in-flight play request with a bounded retry policy
//! - User playlist operations backed by `cadence-storage`
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! The engine owns one [`AudioOutput`] and talks to the catalog through the
//! [`cadence_core::Catalog`] trait. Both are supplied by the platform: a
//! browser audio element, a desktop player, or the logging output used by
//! the CLI.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_playback::{AudioOutput, Engine, PlaybackConfig, PlayFuture};
//! use cadence_core::Catalog;
//! use cadence_storage::MemoryStore;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Silent;
//!
//! impl AudioOutput for Silent {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn load(&mut self) {}
//!     fn play(&mut self) -> PlayFuture {
//!         Box::pin(async { Ok(()) })
//!     }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_volume(&mut self, _level: u8) {}
//!     fn set_muted(&mut self, _muted: bool) {}
//! }
//!
//! # async fn example(catalog: Arc<dyn Catalog>) {
//! let mut engine = Engine::new(
//!     PlaybackConfig::default(),
//!     Box::new(Silent),
//!     catalog,
//!     Box::new(MemoryStore::new()),
//! );
//!
//! let results = engine.search("arijit singh").await;
//! if let Some(first) = results.tracks.first() {
//!     engine.play_track(first.clone(), &results.tracks, true);
//!     engine.settle().await.ok();
//! }
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod events;
mod history;
mod inflight;
mod manager;
pub mod output;
mod queue;
mod shuffle;
pub mod types;
mod volume;

pub use error::{OutputError, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use history::History;
pub use manager::Engine;
pub use output::{AudioOutput, OutputEvent, PlayFuture};
pub use queue::Queue;
pub use shuffle::Shuffler;
pub use types::{PlaybackConfig, PlaybackSnapshot, PlaybackStatus, RetryPolicy};
pub use volume::Volume;
