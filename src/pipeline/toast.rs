//! Transient on-screen notifications ("toasts").
//!
//! A toast is inserted immediately, stays fully visible for the display
//! window, fades for the fade window, and is then removed. Each toast runs on
//! its own timer task, so concurrent toasts never cancel each other.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::NotificationConfig;

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    /// Fully visible.
    Visible,
    /// Fading out, about to be removed.
    Fading,
}

/// A short-lived, auto-dismissing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastNotification {
    /// Unique identifier of this toast.
    pub id: Uuid,
    /// The text shown to the user.
    pub message: String,
    /// When the toast was created.
    pub created_at: DateTime<Utc>,
    /// The current lifecycle phase.
    pub phase: ToastPhase,
}

/// The rendering side of toasts. Implemented by the UI host.
pub trait ToastHost: Send + Sync {
    /// Shows a new toast.
    fn insert(&self, toast: &ToastNotification);

    /// Starts the fade transition of a toast.
    fn begin_fade(&self, id: Uuid);

    /// Removes a toast.
    fn remove(&self, id: Uuid);
}

/// In-memory toast host holding the currently displayed toasts.
///
/// Suitable for hosts that render from a snapshot each frame.
#[derive(Debug, Default)]
pub struct ToastBoard {
    toasts: Mutex<Vec<ToastNotification>>,
}

impl ToastBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the displayed toasts, oldest first.
    pub fn snapshot(&self) -> Vec<ToastNotification> {
        self.lock().clone()
    }

    /// Returns the messages of the displayed toasts, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|toast| toast.message.clone()).collect()
    }

    /// Returns the number of displayed toasts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when no toast is displayed.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ToastNotification>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ToastHost for ToastBoard {
    fn insert(&self, toast: &ToastNotification) {
        self.lock().push(toast.clone());
    }

    fn begin_fade(&self, id: Uuid) {
        if let Some(toast) = self.lock().iter_mut().find(|toast| toast.id == id) {
            toast.phase = ToastPhase::Fading;
        }
    }

    fn remove(&self, id: Uuid) {
        self.lock().retain(|toast| toast.id != id);
    }
}

/// Shows toasts on a host and schedules their dismissal.
///
/// Dismissal timers run on the tokio runtime current at `notify`, else on
/// the runtime the notifier was built on, else on a dedicated timer thread.
#[derive(Clone)]
pub struct ToastNotifier {
    host: Arc<dyn ToastHost>,
    display: Duration,
    fade: Duration,
    runtime: Option<Handle>,
}

impl ToastNotifier {
    /// Creates a notifier using the configured timings.
    pub fn new(host: Arc<dyn ToastHost>, config: NotificationConfig) -> Self {
        Self {
            host,
            display: config.display(),
            fade: config.fade(),
            runtime: Handle::try_current().ok(),
        }
    }

    /// Shows `message` and schedules its fade and removal. Does not wait.
    pub fn notify(&self, message: impl Into<String>) -> Uuid {
        let toast = ToastNotification {
            id: Uuid::new_v4(),
            message: message.into(),
            created_at: Utc::now(),
            phase: ToastPhase::Visible,
        };
        let id = toast.id;
        self.host.insert(&toast);
        debug!(toast_id = %id, message = %toast.message, "Toast shown");

        self.schedule_dismissal(id);
        id
    }

    fn schedule_dismissal(&self, id: Uuid) {
        let host = Arc::clone(&self.host);
        let (display, fade) = (self.display, self.fade);

        match Handle::try_current().ok().or_else(|| self.runtime.clone()) {
            Some(runtime) => {
                runtime.spawn(async move {
                    tokio::time::sleep(display).await;
                    fade_out(host.as_ref(), id);
                    tokio::time::sleep(fade).await;
                    remove(host.as_ref(), id);
                });
            }
            None => {
                let spawned = thread::Builder::new()
                    .name("toast-timer".to_string())
                    .spawn(move || {
                        thread::sleep(display);
                        fade_out(host.as_ref(), id);
                        thread::sleep(fade);
                        remove(host.as_ref(), id);
                    });
                if let Err(e) = spawned {
                    warn!(toast_id = %id, error = %e, "Could not start toast timer; removing toast");
                    self.host.remove(id);
                }
            }
        }
    }
}

fn fade_out(host: &dyn ToastHost, id: Uuid) {
    host.begin_fade(id);
    debug!(toast_id = %id, "Toast fading");
}

fn remove(host: &dyn ToastHost, id: Uuid) {
    host.remove(id);
    debug!(toast_id = %id, "Toast removed");
}

impl std::fmt::Debug for ToastNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastNotifier")
            .field("display", &self.display)
            .field("fade", &self.fade)
            .field("runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}
