//! The animated counter state machine.
//!
//! An [`AnimatedCounter`] animates displayed text from zero to a target
//! value. Each trigger produces an [`AnimationRequest`]; the displayed value
//! for a frame is a pure function of that request and the current time.

use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::config::CounterConfig;

use super::easing::{ease_out_expo, eased_value, progress};
use super::format::{GroupingFormatter, LocaleFormatter};
use super::scheduler::{Clock, FrameHandle, FrameScheduler, ManualScheduler};

/// Default animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Receives the text the counter wants displayed.
pub trait DisplaySink {
    /// Replaces the displayed text.
    fn set_text(&mut self, text: &str);
}

impl DisplaySink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// One animation toward a target value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// The final displayed value.
    pub target_value: Decimal,
    /// Total animation time.
    pub duration: Duration,
    /// Clock time captured when the animation was triggered.
    pub start_time: Duration,
}

impl AnimationRequest {
    /// Returns linear progress in `[0, 1]` at clock time `now`.
    pub fn progress_at(&self, now: Duration) -> f64 {
        progress(now.saturating_sub(self.start_time), self.duration)
    }

    /// Returns true once the animation has run its full duration.
    pub fn is_complete_at(&self, now: Duration) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// Returns the value to display at clock time `now`.
    ///
    /// Once complete this is exactly `target_value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use backoffice_client::counter::AnimationRequest;
    /// use rust_decimal::Decimal;
    /// use std::time::Duration;
    ///
    /// let request = AnimationRequest {
    ///     target_value: Decimal::new(1_250_000, 0),
    ///     duration: Duration::from_millis(2000),
    ///     start_time: Duration::ZERO,
    /// };
    /// assert_eq!(request.value_at(Duration::ZERO), Decimal::ZERO);
    /// assert_eq!(request.value_at(Duration::from_millis(2000)), Decimal::new(1_250_000, 0));
    /// ```
    pub fn value_at(&self, now: Duration) -> Decimal {
        eased_value(self.target_value, ease_out_expo(self.progress_at(now)))
    }
}

/// What happened when a frame callback was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// An intermediate value was displayed and another frame was scheduled.
    Continued,
    /// The exact target was displayed and the animation stopped.
    Completed,
    /// The handle no longer belongs to the active animation; nothing was written.
    Stale,
}

#[derive(Debug)]
struct ActiveAnimation {
    request: AnimationRequest,
    handle: FrameHandle,
}

/// Animates a displayed number toward a target, re-triggerable on change.
///
/// At most one frame callback is outstanding per counter: a new trigger
/// cancels the previous one before scheduling its own, and frames carrying a
/// superseded handle are ignored.
///
/// # Example
///
/// ```
/// use backoffice_client::counter::{AnimatedCounter, ManualClock, ManualScheduler};
/// use rust_decimal::Decimal;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut counter = AnimatedCounter::new(ManualScheduler::new(), clock.clone(), String::new())
///     .with_prefix("$");
///
/// counter.on_value_change(Decimal::new(1_250_000, 0));
/// counter.run_pending_frames();
/// assert_eq!(counter.display(), "$0");
///
/// clock.advance(Duration::from_millis(2000));
/// counter.run_pending_frames();
/// assert_eq!(counter.display(), "$1,250,000");
/// assert!(!counter.is_animating());
/// ```
pub struct AnimatedCounter<S, D> {
    scheduler: S,
    clock: Box<dyn Clock + Send>,
    display: D,
    formatter: Box<dyn LocaleFormatter + Send + Sync>,
    prefix: String,
    suffix: String,
    duration: Duration,
    active: Option<ActiveAnimation>,
}

impl<S: FrameScheduler, D: DisplaySink> AnimatedCounter<S, D> {
    /// Creates a counter with the default duration and formatter.
    pub fn new(scheduler: S, clock: impl Clock + Send + 'static, display: D) -> Self {
        Self {
            scheduler,
            clock: Box::new(clock),
            display,
            formatter: Box::new(GroupingFormatter::default()),
            prefix: String::new(),
            suffix: String::new(),
            duration: DEFAULT_DURATION,
            active: None,
        }
    }

    /// Applies the duration and number formatting from configuration.
    pub fn with_config(self, config: &CounterConfig) -> Self {
        self.with_duration(config.duration())
            .with_formatter(GroupingFormatter::from_config(config))
    }

    /// Sets the text displayed before the number.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the text displayed after the number.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the animation length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Replaces the number formatter.
    pub fn with_formatter(mut self, formatter: impl LocaleFormatter + Send + Sync + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Restarts the animation toward `target`.
    ///
    /// Any pending frame of the previous animation is cancelled before the
    /// new one is scheduled. Returns the handle of the newly scheduled frame.
    pub fn on_value_change(&mut self, target: Decimal) -> FrameHandle {
        self.cancel();

        let request = AnimationRequest {
            target_value: target,
            duration: self.duration,
            start_time: self.clock.now(),
        };
        let handle = self.scheduler.schedule_next_frame();
        debug!(target = %target, duration_ms = request.duration.as_millis(), "Counter animation started");

        self.active = Some(ActiveAnimation { request, handle });
        handle
    }

    /// Delivers a frame callback.
    pub fn on_frame(&mut self, handle: FrameHandle) -> FrameOutcome {
        let request = match &self.active {
            Some(active) if active.handle == handle => active.request.clone(),
            _ => {
                trace!(frame = handle.id(), "Ignoring stale counter frame");
                return FrameOutcome::Stale;
            }
        };

        let now = self.clock.now();
        if request.is_complete_at(now) {
            let text = self.render(request.target_value);
            self.display.set_text(&text);
            self.active = None;
            debug!(target = %request.target_value, "Counter animation completed");
            return FrameOutcome::Completed;
        }

        let value = request.value_at(now);
        let text = self.render(value);
        self.display.set_text(&text);
        trace!(frame = handle.id(), value = %value, "Counter frame");

        let next = self.scheduler.schedule_next_frame();
        if let Some(active) = self.active.as_mut() {
            active.handle = next;
        }
        FrameOutcome::Continued
    }

    /// Stops the running animation, leaving the displayed text as is.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.active.take() {
            self.scheduler.cancel(previous.handle);
        }
    }

    /// Returns true while an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the handle of the outstanding frame, if any.
    pub fn pending_handle(&self) -> Option<FrameHandle> {
        self.active.as_ref().map(|active| active.handle)
    }

    /// Returns the active animation, if any.
    pub fn current_request(&self) -> Option<&AnimationRequest> {
        self.active.as_ref().map(|active| &active.request)
    }

    /// Returns the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn render(&self, value: Decimal) -> String {
        format!("{}{}{}", self.prefix, self.formatter.format(value), self.suffix)
    }
}

impl<D: DisplaySink> AnimatedCounter<ManualScheduler, D> {
    /// Dispatches every pending frame once. Returns how many were delivered.
    pub fn run_pending_frames(&mut self) -> usize {
        let handles = self.scheduler.take_pending();
        let count = handles.len();
        for handle in handles {
            self.on_frame(handle);
        }
        count
    }
}
