//! Monthly salary aggregation for delivery drivers.
//!
//! This crate exposes a single HTTP endpoint that combines shipment-cost
//! records, driver attendance records, and a configurable per-day attendance
//! rate into per-driver salary summaries, with pagination and cost-status
//! filtering.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
