//! Deadline based frame scheduling for the terminal event loop.

use std::time::{Duration, Instant};

use starweave_background::{FrameHandle, FrameScheduler};

/// Hands out at most one pending frame, due one interval after it was
/// requested. The event loop sleeps until [`TickScheduler::timeout`] and
/// draws once [`TickScheduler::take_due`] yields the handle.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Request a frame as if asked at `now`. Replaces any pending request.
    pub fn request_at(&mut self, now: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, now + self.interval));
        handle
    }

    /// How long until the pending frame is due, `None` if nothing is pending.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Consume the pending frame if it is due.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.request_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
