//! Request lifecycle and error normalization.
//!
//! Every outbound request goes through a [`RequestPipeline`], which:
//! - counts it as in flight for the loading indicator ([`RequestActivity`]),
//! - classifies a failure into one user-facing [`ClientError`](crate::error::ClientError) ([`classify`]),
//! - shows the classified message as a toast ([`ToastNotifier`]),
//! - and hands the failure back to the caller.

mod activity;
mod classify;
mod toast;
mod wrapper;

pub use activity::{ActivityGuard, RequestActivity};
pub use classify::{RequestFailure, classify};
pub use toast::{ToastBoard, ToastHost, ToastNotification, ToastNotifier, ToastPhase};
pub use wrapper::RequestPipeline;
