//! Data models exchanged with the back-office API.
//!
//! This module contains the payroll and shift records returned by the
//! server, and the payloads used to create or update them.

mod payroll;
mod shift;

pub use payroll::{NewPayroll, PayrollRecord, PayrollStatus};
pub use shift::{Break, NewShift, Shift};
