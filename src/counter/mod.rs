//! Animated numeric counters.
//!
//! This module animates displayed numbers from zero to a target value with an
//! exponential ease-out curve. The animation is an explicit state object
//! driven by injected [`Clock`] and [`FrameScheduler`] implementations, so it
//! runs the same under a UI frame loop, a tokio interval, or a test.

mod animation;
mod driver;
mod easing;
mod format;
mod scheduler;

pub use animation::{
    AnimatedCounter, AnimationRequest, DEFAULT_DURATION, DisplaySink, FrameOutcome,
};
pub use driver::{DEFAULT_FRAME_INTERVAL, FrameDriver};
pub use easing::{ease_out_expo, eased_value, progress};
pub use format::{GroupingFormatter, LocaleFormatter};
pub use num_format::Locale;
pub use scheduler::{
    Clock, FrameHandle, FrameScheduler, ManualClock, ManualScheduler, MonotonicClock, TokioClock,
};
