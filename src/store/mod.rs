//! Data-store seam for the driver salary service.
//!
//! The aggregation core reads from an external relational store through the
//! [`SalaryStore`] trait, which exposes exactly the grouped, paginated, and
//! point-lookup query shapes the algorithm needs. The store is injected at
//! process start and owned by the application state; nothing in this crate
//! mutates it.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::SalaryResult;
use crate::models::{CostStatus, Period};

mod sqlite;

pub use sqlite::SqliteStore;

/// A shared handle to a salary store implementation.
pub type DynSalaryStore = Arc<dyn SalaryStore>;

/// One grouped cost sum for a `(driver, cost status)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBucketTotal {
    /// The driver the costs are billed to.
    pub driver_code: String,
    /// The cost bucket the sum belongs to.
    pub cost_status: CostStatus,
    /// The summed cost amount.
    pub total: Decimal,
}

/// One grouped present-day count for a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceCount {
    /// The driver the attendance records belong to.
    pub driver_code: String,
    /// Number of present-attendance days in the queried period.
    pub present_days: i64,
}

/// One driver row from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    /// The driver's unique code.
    pub driver_code: String,
    /// The driver's display name.
    pub name: String,
}

/// One grouped distinct-shipment count for a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentCount {
    /// The driver the shipments are billed to.
    pub driver_code: String,
    /// Number of distinct shipment numbers in the queried period.
    pub distinct_shipments: i64,
}

/// Optional case-insensitive substring filters on the driver roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFilter {
    /// Substring to match against driver codes, if any.
    pub driver_code: Option<String>,
    /// Substring to match against driver names, if any.
    pub name: Option<String>,
}

/// Read-only access to the relational store backing salary aggregation.
///
/// All methods are independent reads; implementations must be safe to call
/// concurrently from many requests. Faults surface as
/// [`SalaryError::Store`](crate::error::SalaryError::Store).
#[async_trait]
pub trait SalaryStore: Send + Sync {
    /// Point lookup of a configuration value by key.
    async fn config_value(&self, key: &str) -> SalaryResult<Option<String>>;

    /// Cost sums grouped by `(driver_code, cost_status)` for the period.
    ///
    /// When `include_cancelled` is false, costs whose shipment is CANCELLED
    /// are excluded.
    async fn cost_totals(
        &self,
        period: &Period,
        include_cancelled: bool,
    ) -> SalaryResult<Vec<CostBucketTotal>>;

    /// Present-day counts grouped by driver for the period.
    ///
    /// Only records with a present attendance status are counted.
    async fn attendance_counts(&self, period: &Period) -> SalaryResult<Vec<AttendanceCount>>;

    /// One page of the driver roster under the given filters.
    ///
    /// Rows are ordered by driver code so that pagination is stable. The
    /// roster is not period-scoped.
    async fn drivers_page(
        &self,
        filter: &DriverFilter,
        offset: i64,
        limit: i64,
    ) -> SalaryResult<Vec<DriverRecord>>;

    /// Total roster row count under the same filters as [`Self::drivers_page`].
    async fn count_drivers(&self, filter: &DriverFilter) -> SalaryResult<i64>;

    /// Distinct shipment-number counts for the given drivers in the period.
    ///
    /// One batched call covers every driver on the current page; drivers
    /// without shipments are simply absent from the result. The same
    /// cancellation policy as [`Self::cost_totals`] applies.
    async fn distinct_shipment_counts(
        &self,
        driver_codes: &[String],
        period: &Period,
        include_cancelled: bool,
    ) -> SalaryResult<Vec<ShipmentCount>>;
}
