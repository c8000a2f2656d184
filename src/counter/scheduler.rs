//! Frame scheduling and clock abstractions for the animated counter.
//!
//! The counter never sleeps or spawns: it asks a [`FrameScheduler`] for the
//! next frame and reads time from a [`Clock`]. Hosts decide how frames are
//! paced (a UI event loop, a tokio interval, or a test stepping by hand).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Opaque identifier of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Returns the raw identifier.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Schedules and cancels "next frame" callbacks.
pub trait FrameScheduler {
    /// Requests a callback on the next frame.
    fn schedule_next_frame(&mut self) -> FrameHandle;

    /// Cancels a previously scheduled callback. Unknown handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Supplies monotonic timestamps measured from an arbitrary origin.
pub trait Clock {
    /// Returns the time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// A scheduler that records pending frames for the host to dispatch.
///
/// # Example
///
/// ```
/// use backoffice_client::counter::{FrameScheduler, ManualScheduler};
///
/// let mut scheduler = ManualScheduler::new();
/// let first = scheduler.schedule_next_frame();
/// let second = scheduler.schedule_next_frame();
/// scheduler.cancel(first);
///
/// assert_eq!(scheduler.take_pending(), vec![second]);
/// assert!(scheduler.pending().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl ManualScheduler {
    /// Creates a scheduler with no pending frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the frames that are scheduled and not yet dispatched.
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Removes and returns every pending frame, oldest first.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}

/// Wall-independent clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock backed by [`tokio::time::Instant`], so it follows paused test time.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

impl TokioClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time, saturating at `u64::MAX` nanoseconds.
    pub fn set(&self, now: Duration) {
        self.nanos.store(saturating_nanos(now), Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta`, saturating instead of wrapping.
    pub fn advance(&self, delta: Duration) {
        let delta = saturating_nanos(delta);
        // the closure never returns None, so the update cannot fail
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |nanos| {
                Some(nanos.saturating_add(delta))
            });
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}
