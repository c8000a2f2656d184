//! Easing curve and progress helpers for the animated counter.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Returns the linear progress of an animation, clamped to `[0, 1]`.
///
/// A zero-length animation is always complete.
///
/// # Examples
///
/// ```
/// use backoffice_client::counter::progress;
/// use std::time::Duration;
///
/// let total = Duration::from_millis(2000);
/// assert_eq!(progress(Duration::from_millis(500), total), 0.25);
/// assert_eq!(progress(Duration::from_millis(9000), total), 1.0);
/// ```
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Exponential ease-out: fast initial movement decelerating near the end.
///
/// Returns exactly `1.0` once progress reaches `1.0`, otherwise
/// `1 - 2^(-10 * progress)`.
///
/// # Examples
///
/// ```
/// use backoffice_client::counter::ease_out_expo;
///
/// assert_eq!(ease_out_expo(0.0), 0.0);
/// assert_eq!(ease_out_expo(1.0), 1.0);
/// assert!(ease_out_expo(0.5) > 0.95);
/// ```
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Returns `floor(target * ease)`, the value displayed for one frame.
///
/// An `ease` of `1.0` or more yields `target` unchanged so the final frame
/// carries no rounding drift.
pub fn eased_value(target: Decimal, ease: f64) -> Decimal {
    if ease >= 1.0 {
        return target;
    }

    // ease is in [0, 1) here; the conversion only fails for NaN
    let factor = Decimal::from_f64(ease.max(0.0)).unwrap_or(Decimal::ZERO);
    target
        .checked_mul(factor)
        .map(|value| value.floor())
        .unwrap_or(target)
}
