//! HTTP API access for the back-office client.
//!
//! This module provides the JSON client used by every screen and the thin
//! data-access services for payroll and shifts. All calls go through the
//! [`RequestPipeline`](crate::pipeline::RequestPipeline).

mod client;
mod payroll;
mod shifts;
mod state;

pub use client::{ApiClient, TENANT_HEADER};
pub use payroll::PayrollService;
pub use shifts::ShiftService;
pub use state::AppState;
