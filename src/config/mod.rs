//! Runtime configuration for the driver salary service.
//!
//! Settings come from the process environment with sensible defaults, so the
//! binary runs with no environment at all. The attendance rate itself is not
//! configured here; it lives in the data store's key-value table and is read
//! per request.
//!
//! # Example
//!
//! ```no_run
//! use driver_salary::config::ServiceConfig;
//!
//! let config = ServiceConfig::from_env().unwrap();
//! println!("Binding on {}", config.bind_addr);
//! ```

use std::env;
use std::net::SocketAddr;

use crate::aggregation::AggregationOptions;
use crate::error::{SalaryError, SalaryResult};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite:driver_salary.db";

/// Service settings resolved from the process environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Data store URL (`DATABASE_URL`).
    pub database_url: String,
    /// Count cancelled shipments in the aggregates (`SALARY_INCLUDE_CANCELLED`).
    pub include_cancelled_shipments: bool,
    /// Keep zero-salary drivers in responses (`SALARY_INCLUDE_ZERO_SALARY`).
    pub include_zero_salary_drivers: bool,
}

impl ServiceConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Unset variables fall back to their defaults; a set but unparseable
    /// `BIND_ADDR` is an error rather than a silent fallback.
    pub fn from_env() -> SalaryResult<Self> {
        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|_| SalaryError::Config {
            key: "BIND_ADDR".to_string(),
            message: format!("'{raw_addr}' is not a valid socket address"),
        })?;

        Ok(ServiceConfig {
            bind_addr,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            include_cancelled_shipments: flag_enabled(env::var("SALARY_INCLUDE_CANCELLED").ok()),
            include_zero_salary_drivers: flag_enabled(env::var("SALARY_INCLUDE_ZERO_SALARY").ok()),
        })
    }

    /// Returns the aggregation toggles carried by this configuration.
    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions {
            include_cancelled_shipments: self.include_cancelled_shipments,
            include_zero_salary_drivers: self.include_zero_salary_drivers,
        }
    }
}

/// Interprets an environment flag; `1`, `true`, and `yes` enable it.
fn flag_enabled(value: Option<String>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim().to_ascii_lowercase();
        v == "1" || v == "true" || v == "yes"
    })
}
