//! Request types for the driver salary API.
//!
//! This module defines the query-string structure for the `/list` endpoint
//! and its validation into typed aggregation parameters.

use serde::{Deserialize, Serialize};

use crate::aggregation::SalaryListParams;
use crate::error::{SalaryError, SalaryResult};
use crate::models::{CostStatus, Period};

/// Default page length when `page_size` is absent or unusable.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Default page number when `current` is absent or unusable.
pub const DEFAULT_CURRENT: i64 = 1;

/// Raw query parameters for the `/list` endpoint.
///
/// Every parameter arrives as an optional string; [`SalaryListQuery::validate`]
/// turns them into [`SalaryListParams`] or a
/// [`Validation`](crate::error::SalaryError::Validation) error. Blank values
/// are treated the same as absent ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryListQuery {
    /// Requested month, 1-12. Required.
    pub month: Option<String>,
    /// Requested calendar year. Required.
    pub year: Option<String>,
    /// Page length; defaults to 10.
    pub page_size: Option<String>,
    /// 1-based page number; defaults to 1.
    pub current: Option<String>,
    /// Case-insensitive substring filter on driver codes.
    pub driver_code: Option<String>,
    /// Case-insensitive substring filter on driver names.
    pub name: Option<String>,
    /// Cost bucket that must be strictly positive: PENDING, CONFIRMED or PAID.
    pub status: Option<String>,
}

impl SalaryListQuery {
    /// Validates the raw parameters into typed aggregation parameters.
    pub fn validate(self) -> SalaryResult<SalaryListParams> {
        let (Some(month), Some(year)) = (non_blank(self.month), non_blank(self.year)) else {
            return Err(SalaryError::validation("Month and year are required"));
        };

        let invalid = || SalaryError::validation("Invalid month or year");
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        let period = Period::month(year, month).ok_or_else(invalid)?;

        let status = match non_blank(self.status) {
            Some(raw) => Some(CostStatus::parse(raw.trim()).ok_or_else(|| {
                SalaryError::validation(
                    "Invalid status filter. Allowed values: PENDING, CONFIRMED, PAID.",
                )
            })?),
            None => None,
        };

        Ok(SalaryListParams {
            period,
            page_size: positive_or(self.page_size, DEFAULT_PAGE_SIZE),
            current: positive_or(self.current, DEFAULT_CURRENT),
            driver_code: non_blank(self.driver_code),
            name: non_blank(self.name),
            status,
        })
    }
}

/// Drops values that are empty or whitespace-only.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a positive integer, falling back to the default otherwise.
fn positive_or(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}
