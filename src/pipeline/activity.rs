//! In-flight request tracking for the loading indicator.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
struct ActivityState {
    active: AtomicUsize,
    loading: watch::Sender<bool>,
}

impl ActivityState {
    /// Re-derives the indicator from the count while holding the channel lock,
    /// so the last writer always publishes the final count.
    fn publish(&self) {
        self.loading.send_if_modified(|loading| {
            let now_loading = self.active.load(Ordering::SeqCst) > 0;
            if *loading == now_loading {
                false
            } else {
                *loading = now_loading;
                true
            }
        });
    }
}

/// Counts in-flight requests and drives the loading indicator.
///
/// Create one at startup and share clones for the life of the process; all
/// clones observe the same count. The indicator is active exactly while the
/// count is above zero.
///
/// # Example
///
/// ```
/// use backoffice_client::pipeline::RequestActivity;
///
/// let activity = RequestActivity::new();
/// let loading = activity.subscribe();
///
/// let guard = activity.begin();
/// assert!(*loading.borrow());
/// drop(guard);
/// assert!(!*loading.borrow());
/// ```
#[derive(Debug, Clone)]
pub struct RequestActivity {
    state: Arc<ActivityState>,
}

impl RequestActivity {
    /// Creates a counter at zero with the indicator inactive.
    pub fn new() -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            state: Arc::new(ActivityState {
                active: AtomicUsize::new(0),
                loading,
            }),
        }
    }

    /// Marks a request as started. The returned guard ends it when dropped.
    pub fn begin(&self) -> ActivityGuard {
        let previous = self.state.active.fetch_add(1, Ordering::SeqCst);
        debug!(in_flight = previous + 1, "Request started");
        self.state.publish();
        ActivityGuard {
            state: Arc::clone(&self.state),
        }
    }

    /// Returns the number of requests currently in flight.
    pub fn active_count(&self) -> usize {
        self.state.active.load(Ordering::SeqCst)
    }

    /// Returns true while the loading indicator is active.
    pub fn is_loading(&self) -> bool {
        *self.state.loading.borrow()
    }

    /// Returns a receiver that observes the loading indicator.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.loading.subscribe()
    }
}

impl Default for RequestActivity {
    fn default() -> Self {
        Self::new()
    }
}

/// Ends one in-flight request exactly once, when dropped.
///
/// Dropping covers success, failure, and cancellation of the owning future.
#[derive(Debug)]
#[must_use = "the request ends as soon as the guard is dropped"]
pub struct ActivityGuard {
    state: Arc<ActivityState>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        let previous = self.state.active.fetch_sub(1, Ordering::SeqCst);
        debug!(in_flight = previous - 1, "Request finished");
        self.state.publish();
    }
}
