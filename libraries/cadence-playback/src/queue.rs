//! Upcoming-track queue
//!
//! Head plays next. While shuffle is on the queue also keeps a snapshot of
//! its unshuffled order:
//!
//! ```text
//! Current:   A
//! Queue:     D  B  E  C      (shuffled, head first)
//! Snapshot:  B  C  D  E      (order before shuffling)
//! ```
//!
//! Restoring replaces the queue with the snapshot as it was taken. Tracks
//! played or queued while shuffled do not change it.

use cadence_core::TrackRef;
use std::collections::VecDeque;

/// Ordered queue of upcoming tracks; duplicates allowed
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: VecDeque<TrackRef>,
    snapshot: Option<Vec<TrackRef>>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail
    pub fn push_back(&mut self, track: TrackRef) {
        self.tracks.push_back(track);
    }

    /// Insert at the head (plays next)
    pub fn push_front(&mut self, track: TrackRef) {
        self.tracks.push_front(track);
    }

    /// Remove and return the head
    pub fn pop_front(&mut self) -> Option<TrackRef> {
        self.tracks.pop_front()
    }

    /// Replace the contents, keeping any snapshot
    pub fn replace(&mut self, tracks: Vec<TrackRef>) {
        self.tracks = tracks.into();
    }

    /// Drop every queued track, keeping any snapshot
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Drop every queued track and the snapshot
    pub fn empty(&mut self) {
        self.tracks.clear();
        self.snapshot = None;
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackRef> {
        self.tracks.iter()
    }

    /// Queued tracks, head first
    pub fn to_vec(&self) -> Vec<TrackRef> {
        self.tracks.iter().cloned().collect()
    }

    /// Mutable contiguous view for in-place permutation
    pub fn as_mut_slice(&mut self) -> &mut [TrackRef] {
        self.tracks.make_contiguous()
    }

    /// Remember the current order as the unshuffled order
    pub fn take_snapshot(&mut self) {
        self.snapshot = Some(self.to_vec());
    }

    /// Remember `order` as the unshuffled order
    pub fn set_snapshot(&mut self, order: Vec<TrackRef>) {
        self.snapshot = Some(order);
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replace the queue with the snapshot and drop the snapshot
    ///
    /// Returns false (queue untouched) when there is no snapshot.
    pub fn restore_snapshot(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            return false;
        };
        self.tracks = snapshot.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::Track;

    fn track(id: &str) -> TrackRef {
        Track::new(id, format!("Track {}", id)).into_ref()
    }

    fn ids(queue: &Queue) -> Vec<&str> {
        queue.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn push_and_pop() {
        let mut queue = Queue::new();
        queue.push_back(track("b"));
        queue.push_front(track("a"));
        queue.push_back(track("c"));

        assert_eq!(ids(&queue), vec!["a", "b", "c"]);
        assert_eq!(queue.pop_front().unwrap().id, "a");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn restore_exact_when_untouched() {
        let mut queue = Queue::new();
        queue.replace(vec![track("a"), track("b"), track("c")]);
        queue.take_snapshot();
        queue.as_mut_slice().reverse();

        assert!(queue.restore_snapshot());
        assert_eq!(ids(&queue), vec!["a", "b", "c"]);
        assert!(!queue.has_snapshot());
    }

    #[test]
    fn restore_is_verbatim_after_consume_and_add() {
        let mut queue = Queue::new();
        queue.replace(vec![track("a"), track("b"), track("c")]);
        queue.take_snapshot();
        queue.replace(vec![track("c"), track("a"), track("b")]);

        queue.pop_front();
        queue.push_back(track("d"));

        assert!(queue.restore_snapshot());
        assert_eq!(ids(&queue), vec!["a", "b", "c"]);
    }

    #[test]
    fn restore_keeps_duplicates() {
        let mut queue = Queue::new();
        queue.replace(vec![track("a"), track("b"), track("a")]);
        queue.take_snapshot();
        queue.replace(vec![track("a"), track("a"), track("b")]);
        queue.pop_front();

        queue.restore_snapshot();
        assert_eq!(ids(&queue), vec!["a", "b", "a"]);
    }

    #[test]
    fn empty_drops_snapshot_clear_keeps_it() {
        let mut queue = Queue::new();
        queue.replace(vec![track("a")]);
        queue.take_snapshot();

        queue.clear();
        assert!(queue.has_snapshot());

        queue.empty();
        assert!(!queue.has_snapshot());
        assert!(!queue.restore_snapshot());
    }
}
