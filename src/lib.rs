//! Client library for the point-of-sale back-office suite.
//!
//! This crate provides the request pipeline every API call goes through
//! (in-flight tracking, error classification, toast notifications), the
//! payroll and shift data-access services, and animated numeric counters
//! for dashboard figures.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod counter;
pub mod error;
pub mod models;
pub mod pipeline;
