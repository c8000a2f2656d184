//! Tokio-paced frame loop for hosts without their own render loop.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use super::animation::{AnimatedCounter, DisplaySink};
use super::scheduler::ManualScheduler;

/// Default frame interval, roughly 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Pumps a counter's pending frames on a fixed interval until it settles.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    frame_interval: Duration,
}

impl FrameDriver {
    /// Creates a driver ticking every `frame_interval`.
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    /// Returns the interval between frames.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Runs frames until the counter's animation completes or is cancelled.
    ///
    /// Returns the number of frames delivered. The first frame is delivered
    /// immediately.
    pub async fn run<D: DisplaySink>(&self, counter: &mut AnimatedCounter<ManualScheduler, D>) -> usize {
        let mut interval = time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0;
        while counter.is_animating() {
            interval.tick().await;
            frames += counter.run_pending_frames();
        }
        frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}
