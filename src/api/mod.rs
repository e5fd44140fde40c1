//! HTTP API module for the driver salary service.
//!
//! This module provides the REST endpoint that serves monthly per-driver
//! salary aggregates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalaryListQuery;
pub use response::{ApiError, SalaryListResponse};
pub use state::AppState;
