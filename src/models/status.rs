//! Status enums for shipments and shipment costs.
//!
//! This module defines the CostStatus and ShipmentStatus enums used to
//! bucket shipment costs and to recognize cancelled shipments.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a shipment cost.
///
/// Each shipment cost sits in exactly one bucket; salary aggregation sums
/// the buckets separately and the list endpoint can filter on one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostStatus {
    /// The cost has been recorded but not yet confirmed.
    Pending,
    /// The cost has been confirmed and is awaiting payment.
    Confirmed,
    /// The cost has been paid out.
    Paid,
}

impl CostStatus {
    /// All cost statuses, in bucket order.
    pub const ALL: [CostStatus; 3] = [CostStatus::Pending, CostStatus::Confirmed, CostStatus::Paid];

    /// Returns the wire/storage form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostStatus::Pending => "PENDING",
            CostStatus::Confirmed => "CONFIRMED",
            CostStatus::Paid => "PAID",
        }
    }

    /// Parses the wire/storage form of a status.
    ///
    /// Matching is exact; lowercase or unknown values return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use driver_salary::models::CostStatus;
    ///
    /// assert_eq!(CostStatus::parse("PAID"), Some(CostStatus::Paid));
    /// assert_eq!(CostStatus::parse("paid"), None);
    /// ```
    pub fn parse(value: &str) -> Option<CostStatus> {
        match value {
            "PENDING" => Some(CostStatus::Pending),
            "CONFIRMED" => Some(CostStatus::Confirmed),
            "PAID" => Some(CostStatus::Paid),
            _ => None,
        }
    }
}

/// Lifecycle status of a shipment.
///
/// Only [`ShipmentStatus::Cancelled`] carries meaning for salary
/// aggregation: cancelled shipments are excluded from cost totals and
/// distinct-shipment counts under the default cancellation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    /// The shipment has been created but not dispatched.
    Pending,
    /// The shipment is in transit.
    Ongoing,
    /// The shipment has been delivered.
    Delivered,
    /// The shipment was cancelled.
    Cancelled,
}

impl ShipmentStatus {
    /// Returns the wire/storage form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "PENDING",
            ShipmentStatus::Ongoing => "ONGOING",
            ShipmentStatus::Delivered => "DELIVERED",
            ShipmentStatus::Cancelled => "CANCELLED",
        }
    }
}
