//! Single in-flight play request
//!
//! At most one play future is outstanding. Starting a new play or pausing
//! first supersedes the pending one: a result that is already available is
//! consumed (rejections are logged and swallowed), anything still running is
//! dropped. A superseded request is never retried.

use crate::output::PlayFuture;
use futures_util::FutureExt;
use tracing::debug;

/// Pending play request for one track
pub(crate) struct PendingPlay {
    pub track_id: String,
    pub future: PlayFuture,
}

/// Holder for the pending play request
#[derive(Default)]
pub(crate) struct PlaySlot {
    pending: Option<PendingPlay>,
}

impl PlaySlot {
    /// Track a new play request, superseding any pending one
    pub fn begin(&mut self, track_id: impl Into<String>, future: PlayFuture) {
        self.supersede();
        self.pending = Some(PendingPlay {
            track_id: track_id.into(),
            future,
        });
    }

    /// Resolve-or-discard the pending request without waiting
    pub fn supersede(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.future.now_or_never() {
            Some(Ok(())) => {
                debug!(track_id = %pending.track_id, "Pending play had already started");
            }
            Some(Err(e)) => {
                debug!(track_id = %pending.track_id, error = %e, "Swallowed superseded play rejection");
            }
            None => {
                debug!(track_id = %pending.track_id, "Discarded pending play");
            }
        }
    }

    /// Take the pending request for awaiting
    pub fn take(&mut self) -> Option<PendingPlay> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl std::fmt::Debug for PlaySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaySlot")
            .field(
                "pending",
                &self.pending.as_ref().map(|p| p.track_id.as_str()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutputError;
    use futures_util::future;

    #[test]
    fn supersede_swallows_ready_rejection() {
        let mut slot = PlaySlot::default();
        slot.begin("a", Box::pin(future::ready(Err(OutputError::Aborted))));
        assert!(slot.is_pending());

        slot.supersede();
        assert!(!slot.is_pending());
    }

    #[test]
    fn begin_replaces_pending() {
        let mut slot = PlaySlot::default();
        slot.begin("a", Box::pin(future::pending::<Result<(), OutputError>>()));
        slot.begin("b", Box::pin(future::ready(Ok::<(), OutputError>(()))));

        let pending = slot.take().unwrap();
        assert_eq!(pending.track_id, "b");
        assert!(slot.take().is_none());
    }
}
