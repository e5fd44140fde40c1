//! Per-driver salary summary models.
//!
//! This module contains the [`DriverSalarySummary`] type returned by the
//! list endpoint and the [`CostBuckets`] helper that carries a driver's
//! per-status cost sums through the aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostStatus;

/// A driver's shipment-cost sums, one per cost status bucket.
///
/// Buckets missing from the store default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostBuckets {
    /// Sum of costs with status PENDING.
    pub pending: Decimal,
    /// Sum of costs with status CONFIRMED.
    pub confirmed: Decimal,
    /// Sum of costs with status PAID.
    pub paid: Decimal,
}

impl CostBuckets {
    /// Returns the sum held in the bucket for the given status.
    pub fn get(&self, status: CostStatus) -> Decimal {
        match status {
            CostStatus::Pending => self.pending,
            CostStatus::Confirmed => self.confirmed,
            CostStatus::Paid => self.paid,
        }
    }

    /// Adds an amount into the bucket for the given status.
    pub fn add(&mut self, status: CostStatus, amount: Decimal) {
        match status {
            CostStatus::Pending => self.pending += amount,
            CostStatus::Confirmed => self.confirmed += amount,
            CostStatus::Paid => self.paid += amount,
        }
    }
}

/// A driver's computed salary aggregate for one calendar month.
///
/// Summaries are derived fresh on every request and never persisted. The
/// total always satisfies `total_salary = total_pending + total_confirmed +
/// total_paid + total_attendance_salary`, which [`DriverSalarySummary::compute`]
/// enforces by construction.
///
/// # Example
///
/// ```
/// use driver_salary::models::{CostBuckets, DriverSalarySummary};
/// use rust_decimal::Decimal;
///
/// let buckets = CostBuckets {
///     pending: Decimal::from(100),
///     ..CostBuckets::default()
/// };
/// let summary = DriverSalarySummary::compute(
///     "D1".to_string(),
///     "Alice".to_string(),
///     buckets,
///     Decimal::from(100),
///     1,
/// );
/// assert_eq!(summary.total_salary, Decimal::from(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverSalarySummary {
    /// The driver's unique code.
    pub driver_code: String,
    /// The driver's display name.
    pub name: String,
    /// Sum of shipment costs with status PENDING in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pending: Decimal,
    /// Sum of shipment costs with status CONFIRMED in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_confirmed: Decimal,
    /// Sum of shipment costs with status PAID in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_paid: Decimal,
    /// Present-attendance days in the period times the configured daily rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_attendance_salary: Decimal,
    /// Sum of the three cost buckets and the attendance salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_salary: Decimal,
    /// Number of distinct shipments billed to the driver in the period.
    pub count_shipment: i64,
}

impl DriverSalarySummary {
    /// Builds a summary from its components, computing the total.
    pub fn compute(
        driver_code: String,
        name: String,
        buckets: CostBuckets,
        total_attendance_salary: Decimal,
        count_shipment: i64,
    ) -> Self {
        let total_salary =
            buckets.pending + buckets.confirmed + buckets.paid + total_attendance_salary;
        DriverSalarySummary {
            driver_code,
            name,
            total_pending: buckets.pending,
            total_confirmed: buckets.confirmed,
            total_paid: buckets.paid,
            total_attendance_salary,
            total_salary,
            count_shipment,
        }
    }

    /// Returns the cost-bucket total matching the given status filter.
    pub fn bucket_total(&self, status: CostStatus) -> Decimal {
        match status {
            CostStatus::Pending => self.total_pending,
            CostStatus::Confirmed => self.total_confirmed,
            CostStatus::Paid => self.total_paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(pending: i64, confirmed: i64, paid: i64, attendance: i64) -> DriverSalarySummary {
        let buckets = CostBuckets {
            pending: Decimal::from(pending),
            confirmed: Decimal::from(confirmed),
            paid: Decimal::from(paid),
        };
        DriverSalarySummary::compute(
            "D1".to_string(),
            "Alice".to_string(),
            buckets,
            Decimal::from(attendance),
            0,
        )
    }

    #[test]
    fn test_compute_totals_all_components() {
        let s = summary(100, 200, 300, 50);
        assert_eq!(s.total_salary, Decimal::from(650));
    }

    #[test]
    fn test_all_zero_components_give_zero_total() {
        let s = summary(0, 0, 0, 0);
        assert_eq!(s.total_salary, Decimal::ZERO);
    }

    #[test]
    fn test_bucket_total_selects_matching_bucket() {
        let s = summary(10, 20, 30, 0);
        assert_eq!(s.bucket_total(CostStatus::Pending), Decimal::from(10));
        assert_eq!(s.bucket_total(CostStatus::Confirmed), Decimal::from(20));
        assert_eq!(s.bucket_total(CostStatus::Paid), Decimal::from(30));
    }

    #[test]
    fn test_cost_buckets_add_and_get() {
        let mut buckets = CostBuckets::default();
        buckets.add(CostStatus::Paid, Decimal::from(75));
        buckets.add(CostStatus::Paid, Decimal::from(25));
        assert_eq!(buckets.get(CostStatus::Paid), Decimal::from(100));
        assert_eq!(buckets.get(CostStatus::Pending), Decimal::ZERO);
    }

    #[test]
    fn test_serializes_money_as_json_numbers() {
        let s = summary(100, 0, 0, 100);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["driver_code"], "D1");
        assert_eq!(json["total_pending"].as_f64(), Some(100.0));
        assert_eq!(json["total_salary"].as_f64(), Some(200.0));
        assert_eq!(json["count_shipment"], 0);
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let s = summary(100, 200, 300, 50);
        let json = serde_json::to_string(&s).unwrap();
        let back: DriverSalarySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    proptest! {
        #[test]
        fn prop_total_salary_is_sum_of_components(
            pending in 0i64..1_000_000,
            confirmed in 0i64..1_000_000,
            paid in 0i64..1_000_000,
            attendance in 0i64..1_000_000,
        ) {
            let s = summary(pending, confirmed, paid, attendance);
            prop_assert_eq!(
                s.total_salary,
                s.total_pending + s.total_confirmed + s.total_paid + s.total_attendance_salary
            );
        }
    }
}
