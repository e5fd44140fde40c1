//! HTTP request handlers for the driver salary API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::aggregation::list_driver_salaries;

use super::request::SalaryListQuery;
use super::response::{ApiErrorResponse, SalaryListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let salary_routes = Router::new().route("/list", get(list_salaries_handler));

    Router::new()
        .nest("/v1/salary/driver", salary_routes)
        .with_state(state)
}

/// Handler for GET /v1/salary/driver/list.
///
/// Validates the query parameters, runs the aggregation against the store,
/// and returns one page of per-driver salary summaries.
async fn list_salaries_handler(
    State(state): State<AppState>,
    Query(query): Query<SalaryListQuery>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing driver salary list request");

    let params = match query.validate() {
        Ok(params) => params,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request validation failed"
            );
            let response: ApiErrorResponse = err.into();
            return response.into_response();
        }
    };

    match list_driver_salaries(state.store(), &params, state.options()).await {
        Ok(page) => {
            info!(
                correlation_id = %correlation_id,
                total_row = page.total_row,
                returned = page.data.len(),
                current = page.current,
                "Salary aggregation completed"
            );
            (StatusCode::OK, Json(SalaryListResponse::from(page))).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary aggregation failed"
            );
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::AggregationOptions;
    use crate::api::response::ApiError;
    use crate::error::{SalaryError, SalaryResult};
    use crate::models::Period;
    use crate::store::{
        AttendanceCount, CostBucketTotal, DriverFilter, DriverRecord, SalaryStore, ShipmentCount,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Store whose every method fails, for exercising the 500 path.
    struct FailingStore;

    #[async_trait]
    impl SalaryStore for FailingStore {
        async fn config_value(&self, _key: &str) -> SalaryResult<Option<String>> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }

        async fn cost_totals(
            &self,
            _period: &Period,
            _include_cancelled: bool,
        ) -> SalaryResult<Vec<CostBucketTotal>> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }

        async fn attendance_counts(&self, _period: &Period) -> SalaryResult<Vec<AttendanceCount>> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }

        async fn drivers_page(
            &self,
            _filter: &DriverFilter,
            _offset: i64,
            _limit: i64,
        ) -> SalaryResult<Vec<DriverRecord>> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }

        async fn count_drivers(&self, _filter: &DriverFilter) -> SalaryResult<i64> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }

        async fn distinct_shipment_counts(
            &self,
            _driver_codes: &[String],
            _period: &Period,
            _include_cancelled: bool,
        ) -> SalaryResult<Vec<ShipmentCount>> {
            Err(SalaryError::Store {
                message: "connection reset".to_string(),
            })
        }
    }

    /// Store with no data at all; every read succeeds with nothing.
    struct EmptyStore;

    #[async_trait]
    impl SalaryStore for EmptyStore {
        async fn config_value(&self, _key: &str) -> SalaryResult<Option<String>> {
            Ok(None)
        }

        async fn cost_totals(
            &self,
            _period: &Period,
            _include_cancelled: bool,
        ) -> SalaryResult<Vec<CostBucketTotal>> {
            Ok(Vec::new())
        }

        async fn attendance_counts(&self, _period: &Period) -> SalaryResult<Vec<AttendanceCount>> {
            Ok(Vec::new())
        }

        async fn drivers_page(
            &self,
            _filter: &DriverFilter,
            _offset: i64,
            _limit: i64,
        ) -> SalaryResult<Vec<DriverRecord>> {
            Ok(Vec::new())
        }

        async fn count_drivers(&self, _filter: &DriverFilter) -> SalaryResult<i64> {
            Ok(0)
        }

        async fn distinct_shipment_counts(
            &self,
            _driver_codes: &[String],
            _period: &Period,
            _include_cancelled: bool,
        ) -> SalaryResult<Vec<ShipmentCount>> {
            Ok(Vec::new())
        }
    }

    fn router_with(store: Arc<dyn SalaryStore>) -> Router {
        create_router(AppState::new(store, AggregationOptions::default()))
    }

    async fn get_response(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_missing_month_and_year_returns_400() {
        let router = router_with(Arc::new(EmptyStore));
        let (status, body) = get_response(router, "/v1/salary/driver/list").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "Month and year are required");
        assert!(!error.is_success);
    }

    #[tokio::test]
    async fn test_invalid_month_returns_400() {
        let router = router_with(Arc::new(EmptyStore));
        let (status, body) =
            get_response(router, "/v1/salary/driver/list?month=13&year=2025").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "Invalid month or year");
    }

    #[tokio::test]
    async fn test_invalid_status_returns_400() {
        let router = router_with(Arc::new(EmptyStore));
        let (status, body) =
            get_response(router, "/v1/salary/driver/list?month=5&year=2025&status=SHIPPED").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error.message,
            "Invalid status filter. Allowed values: PENDING, CONFIRMED, PAID."
        );
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_page() {
        let router = router_with(Arc::new(EmptyStore));
        let (status, body) = get_response(router, "/v1/salary/driver/list?month=5&year=2025").await;

        assert_eq!(status, StatusCode::OK);
        let response: SalaryListResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.total_row, 0);
        assert_eq!(response.current, 1);
        assert_eq!(response.page_size, 10);
        assert!(response.is_success);
    }

    #[tokio::test]
    async fn test_store_fault_returns_opaque_500() {
        let router = router_with(Arc::new(FailingStore));
        let (status, body) = get_response(router, "/v1/salary/driver/list?month=5&year=2025").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "Internal server error");
        assert!(!error.is_success);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let router = router_with(Arc::new(EmptyStore));
        let (status, _) = get_response(router, "/v1/salary/driver/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
