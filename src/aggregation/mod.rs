//! Salary aggregation and filtering.
//!
//! This module implements the monthly per-driver salary computation: it
//! issues the grouped reads against the store, joins them in memory keyed by
//! driver code, derives the attendance salary and the total, and applies the
//! zero-salary and cost-status filters before handing a page back to the API
//! layer.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::SalaryResult;
use crate::models::{CostBuckets, CostStatus, DriverSalarySummary, Period};
use crate::store::{DriverFilter, SalaryStore};

/// Configuration key holding the per-day attendance rate as a numeric string.
pub const ATTENDANCE_RATE_KEY: &str = "DRIVER_MONTHLY_ATTENDANCE_SALARY";

/// Behavioral toggles for the aggregation.
///
/// The defaults are the canonical behavior: cancelled shipments are excluded
/// from cost totals and shipment counts, and drivers whose total salary is
/// not positive are dropped from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Count costs and shipments of CANCELLED shipments.
    pub include_cancelled_shipments: bool,
    /// Keep drivers whose `total_salary <= 0` in the page.
    pub include_zero_salary_drivers: bool,
}

/// Validated parameters for one salary list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryListParams {
    /// The calendar month being aggregated.
    pub period: Period,
    /// Page length.
    pub page_size: i64,
    /// 1-based page number.
    pub current: i64,
    /// Case-insensitive substring filter on driver codes, if any.
    pub driver_code: Option<String>,
    /// Case-insensitive substring filter on driver names, if any.
    pub name: Option<String>,
    /// Cost bucket that must be strictly positive, if any.
    pub status: Option<CostStatus>,
}

/// One page of salary summaries plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryPage {
    /// The filtered summaries for the requested page.
    pub data: Vec<DriverSalarySummary>,
    /// Total roster rows under the driver filters, unscoped by period.
    pub total_row: i64,
    /// The requested 1-based page number.
    pub current: i64,
    /// The requested page length.
    pub page_size: i64,
}

/// Computes one page of per-driver salary summaries.
///
/// The computation is read-only and stateless: repeated identical requests
/// against unchanged data return identical results. Grouped cost sums and
/// attendance counts are fetched once for the whole period and joined in
/// memory against the paginated driver roster; the distinct-shipment counts
/// are fetched in one batched call for exactly the drivers on the page.
pub async fn list_driver_salaries(
    store: &dyn SalaryStore,
    params: &SalaryListParams,
    options: &AggregationOptions,
) -> SalaryResult<SalaryPage> {
    let include_cancelled = options.include_cancelled_shipments;

    let rate = attendance_rate(store).await?;
    let cost_rows = store.cost_totals(&params.period, include_cancelled).await?;
    let attendance_rows = store.attendance_counts(&params.period).await?;

    let filter = DriverFilter {
        driver_code: params.driver_code.clone(),
        name: params.name.clone(),
    };
    let offset = (params.current - 1) * params.page_size;
    let drivers = store.drivers_page(&filter, offset, params.page_size).await?;
    let total_row = store.count_drivers(&filter).await?;

    let codes: Vec<String> = drivers.iter().map(|d| d.driver_code.clone()).collect();
    let shipment_rows = store
        .distinct_shipment_counts(&codes, &params.period, include_cancelled)
        .await?;

    // Join everything by driver code before walking the page, so each driver
    // is a pair of map lookups rather than a scan.
    let mut cost_map: HashMap<String, CostBuckets> = HashMap::new();
    for row in cost_rows {
        cost_map
            .entry(row.driver_code)
            .or_default()
            .add(row.cost_status, row.total);
    }
    let attendance_map: HashMap<String, i64> = attendance_rows
        .into_iter()
        .map(|row| (row.driver_code, row.present_days))
        .collect();
    let shipment_map: HashMap<String, i64> = shipment_rows
        .into_iter()
        .map(|row| (row.driver_code, row.distinct_shipments))
        .collect();

    let mut data = Vec::with_capacity(drivers.len());
    for driver in drivers {
        let buckets = cost_map
            .get(&driver.driver_code)
            .copied()
            .unwrap_or_default();
        let present_days = attendance_map
            .get(&driver.driver_code)
            .copied()
            .unwrap_or(0);
        let count_shipment = shipment_map
            .get(&driver.driver_code)
            .copied()
            .unwrap_or(0);

        let total_attendance_salary = Decimal::from(present_days) * rate;
        let summary = DriverSalarySummary::compute(
            driver.driver_code,
            driver.name,
            buckets,
            total_attendance_salary,
            count_shipment,
        );

        if !options.include_zero_salary_drivers && summary.total_salary <= Decimal::ZERO {
            continue;
        }
        if let Some(status) = params.status {
            if summary.bucket_total(status) <= Decimal::ZERO {
                continue;
            }
        }
        data.push(summary);
    }

    Ok(SalaryPage {
        data,
        total_row,
        current: params.current,
        page_size: params.page_size,
    })
}

/// Looks up the per-day attendance rate from configuration.
///
/// Defaults to zero when the key is absent or its value is not numeric.
async fn attendance_rate(store: &dyn SalaryStore) -> SalaryResult<Decimal> {
    let raw = store.config_value(ATTENDANCE_RATE_KEY).await?;
    Ok(raw
        .and_then(|value| value.trim().parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO))
}
