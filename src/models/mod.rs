//! Core data models for the driver salary service.
//!
//! This module contains all the domain models used throughout the service.

mod period;
mod status;
mod summary;

pub use period::Period;
pub use status::{CostStatus, ShipmentStatus};
pub use summary::{CostBuckets, DriverSalarySummary};
