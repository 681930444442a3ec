//! Playback history tracking
//!
//! Bounded list of played tracks consumed by "skip to previous".

use cadence_core::TrackRef;
use std::collections::VecDeque;

/// Playback history with bounded size
///
/// Most recent track at the front. Pushing past the bound evicts the oldest.
#[derive(Debug, Clone)]
pub struct History {
    tracks: VecDeque<TrackRef>,
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a played track as the most recent entry
    pub fn push(&mut self, track: TrackRef) {
        if self.max_size == 0 {
            return;
        }
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<TrackRef> {
        self.tracks.pop_front()
    }

    /// Most recent entry
    pub fn peek(&self) -> Option<&TrackRef> {
        self.tracks.front()
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &TrackRef> {
        self.tracks.iter()
    }

    /// Entries as a vector, most recent first
    pub fn to_vec(&self) -> Vec<TrackRef> {
        self.tracks.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}
